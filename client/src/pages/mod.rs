//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access control is applied by `ProtectedRoute` in `app`,
//! never inside a page.

pub mod dashboard;
pub mod login;
pub mod profile;
pub mod signup;

/// What a form page does once its request settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Navigate(&'static str),
    ShowError(&'static str),
}
