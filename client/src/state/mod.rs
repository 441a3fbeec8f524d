//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the observable state; `session` owns every transition of it.

pub mod auth;
pub mod session;
