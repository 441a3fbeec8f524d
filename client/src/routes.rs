//! Client-visible route table.
//!
//! `/` and every unmatched path redirect to `/login`; `app::App` declares one
//! router entry per `AppRoute`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;
use crate::util::auth::Access;

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const PROFILE_PATH: &str = "/profile";

/// Where the login page sends the user after signup, with the
/// account-created notice enabled.
pub const LOGIN_AFTER_SIGNUP_PATH: &str = "/login?registered=1";

/// Landing view for authenticated users who lack a route's role.
pub const DEFAULT_AUTHENTICATED_PATH: &str = PROFILE_PATH;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Signup,
    Dashboard,
    Profile,
}

impl AppRoute {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Signup => SIGNUP_PATH,
            Self::Dashboard => DASHBOARD_PATH,
            Self::Profile => PROFILE_PATH,
        }
    }

    /// Router segment for this view: the path without its leading slash.
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    pub fn access(self) -> Access {
        match self {
            Self::Login | Self::Signup => Access::Public,
            Self::Dashboard => Access::Role(Role::Admin),
            Self::Profile => Access::Authenticated,
        }
    }
}
