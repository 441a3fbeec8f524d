//! REST client for the remote authentication API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call fails with
//! `ApiError::Unavailable` since these endpoints are only meaningful in the
//! browser.
//!
//! DESIGN
//! ======
//! The `Authorization` value is an explicit argument of the calls that need
//! it. There is no shared default header to mutate, so a request always
//! carries the session that was current when it was built.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{LoginRequest, LoginResponse, SignupRequest, User};

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const SIGNUP_ENDPOINT: &str = "/api/auth/signup";
pub const PROFILE_ENDPOINT: &str = "/api/profile";

/// The three calls the session manager depends on.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Exchange credentials for a session token and the signed-in user.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// Register a new account. The response body is ignored.
    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError>;

    /// Resolve the session behind `bearer` (a full `Authorization` value)
    /// to the user it belongs to.
    async fn fetch_profile(&self, bearer: &str) -> Result<User, ApiError>;
}

/// `AuthApi` over same-origin HTTP; the server forwards `/api/*` upstream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HttpAuthApi;

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Rejected { status }) }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
                .json(request)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            check_status(resp.status())?;
            resp.json::<LoginResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(SIGNUP_ENDPOINT)
                .json(request)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            check_status(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_profile(&self, bearer: &str) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(PROFILE_ENDPOINT)
                .header("Authorization", bearer)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            check_status(resp.status())?;
            resp.json::<User>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = bearer;
            Err(ApiError::Unavailable)
        }
    }
}
