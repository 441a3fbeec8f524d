//! Auth session manager: the only owner of login/logout transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views call `login`/`signup`/`logout`; `App` calls `restore` once on mount.
//! Each action updates the token slot and the published `AuthState` in the
//! same synchronous step, so a user is never visible without a stored token.
//!
//! ERROR HANDLING
//! ==============
//! Actions return `ActionFailed` with no detail. The underlying `ApiError`
//! kind is logged to the console and then dropped.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, expect_context};

use crate::net::api::{AuthApi, HttpAuthApi};
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, LoginResponse, SignupRequest};
use crate::routes::LOGIN_PATH;
use crate::state::auth::{AuthState, AuthStateCell};
use crate::util::session_store::{LocalSessionStore, SessionStore};

/// The session type provided as context in the browser app.
pub type BrowserAuthSession = AuthSession<LocalSessionStore, HttpAuthApi, RwSignal<AuthState>>;

/// Fetch the app-wide session from context.
pub fn use_auth_session() -> BrowserAuthSession {
    expect_context::<BrowserAuthSession>()
}

/// A login or signup attempt did not succeed. Deliberately carries no cause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("request failed")]
pub struct ActionFailed;

#[derive(Clone, Debug)]
pub struct AuthSession<S, A, C> {
    store: S,
    api: A,
    state: C,
}

impl<S, A, C> AuthSession<S, A, C>
where
    S: SessionStore,
    A: AuthApi,
    C: AuthStateCell,
{
    pub fn new(store: S, api: A, state: C) -> Self {
        Self { store, api, state }
    }

    pub fn state(&self) -> AuthState {
        self.state.snapshot()
    }

    pub fn state_cell(&self) -> &C {
        &self.state
    }

    /// `Authorization` value for the current session, read from the token slot.
    pub fn bearer(&self) -> Option<String> {
        self.store.get().map(|token| token.bearer_header())
    }

    /// Resolve a stored token into a user. Runs once at startup.
    ///
    /// Any failure drops the token without retry or user-visible message.
    /// If the slot changed while the check was in flight (login or logout in
    /// the meantime), the newer action's result is left alone.
    pub async fn restore(&self) {
        self.state.publish(AuthState::Loading);
        let Some(bearer) = self.bearer() else {
            self.state.publish(AuthState::Anonymous);
            return;
        };

        let result = self.api.fetch_profile(&bearer).await;
        if self.bearer().as_deref() != Some(bearer.as_str()) {
            log::debug!("session changed during startup check; ignoring result");
            return;
        }
        match result {
            Ok(user) => {
                log::info!("session restored for {}", user.email);
                self.state.publish(AuthState::Authenticated(user));
            }
            Err(err) => {
                log_failure("session restore", &err);
                self.end_session();
            }
        }
    }

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns `ActionFailed` for any rejection, or when the token cannot be
    /// persisted; state and token are untouched either way.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ActionFailed> {
        let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let LoginResponse { token, user } = self.api.login(&request).await.map_err(|err| {
            log_failure("login", &err);
            ActionFailed
        })?;
        if let Err(err) = self.store.set(&token) {
            log::warn!("login failed: {err}");
            return Err(ActionFailed);
        }
        self.state.publish(AuthState::Authenticated(user));
        Ok(())
    }

    /// Register an account. Never signs the user in.
    ///
    /// # Errors
    ///
    /// Returns `ActionFailed` for any rejection, duplicate email included.
    pub async fn signup(&self, full_name: &str, email: &str, password: &str) -> Result<(), ActionFailed> {
        let request = SignupRequest {
            full_name: full_name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };
        self.api.signup(&request).await.map_err(|err| {
            log_failure("signup", &err);
            ActionFailed
        })
    }

    /// Drop the session and return the path to navigate to. Idempotent.
    pub fn logout(&self) -> &'static str {
        self.end_session();
        LOGIN_PATH
    }

    fn end_session(&self) {
        self.store.clear();
        self.state.publish(AuthState::Anonymous);
    }
}

fn log_failure(action: &str, err: &ApiError) {
    log::warn!("{action} failed ({}): {err}", err.kind());
}
