//! Networking modules for the remote authentication API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls, `error` classifies their failures, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
