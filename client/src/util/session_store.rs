//! Persistence slot for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser keeps the token in `localStorage` under a fixed key so a
//! session survives reloads. Contents are never inspected here; the API is
//! the only judge of whether a token is still valid.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::net::types::SessionToken;

/// `localStorage` key holding the raw token string.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// A token could not be written; the slot keeps its previous value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("token storage unavailable")]
    Unavailable,
    #[error("token write rejected: {0}")]
    WriteRejected(String),
}

/// A single-slot token store. An empty slot means "no session".
pub trait SessionStore {
    fn get(&self) -> Option<SessionToken>;

    /// # Errors
    ///
    /// Returns `StoreError` if the token was not persisted.
    fn set(&self, token: &SessionToken) -> Result<(), StoreError>;

    fn clear(&self);
}

/// Browser `localStorage` backed store. Outside the browser the slot is
/// always empty and writes fail with `StoreError::Unavailable`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalSessionStore {
    fn get(&self) -> Option<SessionToken> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()?;
            Some(SessionToken::new(raw))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &SessionToken) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StoreError::Unavailable)?;
            storage
                .set_item(TOKEN_STORAGE_KEY, token.as_str())
                .map_err(|e| StoreError::WriteRejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(StoreError::Unavailable)
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
        }
    }
}

/// In-process store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    slot: Rc<RefCell<Option<SessionToken>>>,
}

impl MemorySessionStore {
    pub fn with_token(token: SessionToken) -> Self {
        Self { slot: Rc::new(RefCell::new(Some(token))) }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<SessionToken> {
        self.slot.borrow().clone()
    }

    fn set(&self, token: &SessionToken) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = Some(token.clone());
        Ok(())
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
