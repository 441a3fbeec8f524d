//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and form pieces while reading shared session
//! state from Leptos context.

pub mod navbar;
pub mod protected_route;
pub mod text_input;
