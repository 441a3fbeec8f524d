//! Structured failure type for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! The session manager collapses every `ApiError` to a single failure signal
//! before it reaches a view. The kind survives only in console logs, so the
//! UI never reveals whether an account exists.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

/// Failure of a single API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The API answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected { status: u16 },
    /// A 2xx response whose body did not match the expected schema.
    #[error("malformed response: {0}")]
    Decode(String),
    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

/// Coarse failure category used for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiErrorKind {
    Transport,
    Auth,
    Validation,
    Server,
    Malformed,
}

impl ApiError {
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            Self::Network(_) | Self::Unavailable => ApiErrorKind::Transport,
            Self::Rejected { status: 401 | 403 } => ApiErrorKind::Auth,
            Self::Rejected { status: 400 | 409 | 422 } => ApiErrorKind::Validation,
            Self::Rejected { .. } => ApiErrorKind::Server,
            Self::Decode(_) => ApiErrorKind::Malformed,
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Transport => "transport",
            Self::Auth => "auth",
            Self::Validation => "validation",
            Self::Server => "server",
            Self::Malformed => "malformed",
        })
    }
}
