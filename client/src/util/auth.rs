//! Route guard shared by every protected page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components must apply identical redirect behavior, so the decision
//! is a pure function of the current `AuthState` and the route's `Access`.
//! It owns no state and is re-evaluated on every render. This is a UX guard
//! only; the API still rejects requests without a valid token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Role;
use crate::routes::{DEFAULT_AUTHENTICATED_PATH, LOGIN_PATH};
use crate::state::auth::AuthState;

/// What a route requires before it may render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    /// Authenticated with exactly this role.
    Role(Role),
}

/// Guard outcome for one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth is unresolved; show a neutral loading indicator.
    Loading,
    Render,
    Redirect(&'static str),
}

pub fn evaluate(state: &AuthState, access: &Access) -> GuardDecision {
    match (access, state) {
        (Access::Public, _) => GuardDecision::Render,
        (_, AuthState::Loading) => GuardDecision::Loading,
        (_, AuthState::Anonymous) => GuardDecision::Redirect(LOGIN_PATH),
        (Access::Role(required), AuthState::Authenticated(user)) if user.role != *required => {
            GuardDecision::Redirect(DEFAULT_AUTHENTICATED_PATH)
        }
        (_, AuthState::Authenticated(_)) => GuardDecision::Render,
    }
}
