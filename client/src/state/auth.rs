//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The state starts `Loading` and
//! must resolve before any redirect decision is taken, otherwise a reload
//! would bounce a signed-in user to `/login` while the profile check is still
//! in flight.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{GetUntracked, RwSignal, Set};

use crate::net::types::User;

/// Authentication state observed by views and the route guard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    /// Startup validation has not finished yet.
    #[default]
    Loading,
    /// No valid session.
    Anonymous,
    /// A token resolved to this user.
    Authenticated(User),
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Holder of the current `AuthState`.
///
/// The UI stores it in an `RwSignal` so views re-render on change; tests use
/// a plain `Rc<RefCell<_>>`.
pub trait AuthStateCell {
    fn snapshot(&self) -> AuthState;
    fn publish(&self, state: AuthState);
}

impl AuthStateCell for RwSignal<AuthState> {
    fn snapshot(&self) -> AuthState {
        self.get_untracked()
    }

    fn publish(&self, state: AuthState) {
        self.set(state);
    }
}

impl AuthStateCell for Rc<RefCell<AuthState>> {
    fn snapshot(&self) -> AuthState {
        self.borrow().clone()
    }

    fn publish(&self, state: AuthState) {
        *self.borrow_mut() = state;
    }
}
