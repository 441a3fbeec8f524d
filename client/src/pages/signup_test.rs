use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::api::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, LoginResponse, SignupRequest, User};
use crate::state::auth::AuthState;
use crate::state::session::AuthSession;
use crate::util::session_store::MemorySessionStore;

/// Signup endpoint that answers with a fixed result and records what it got.
struct SignupReply {
    result: Result<(), ApiError>,
    received: Rc<RefCell<Option<SignupRequest>>>,
}

impl AuthApi for SignupReply {
    async fn login(&self, _: &LoginRequest) -> Result<LoginResponse, ApiError> {
        Err(ApiError::Unavailable)
    }
    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        *self.received.borrow_mut() = Some(request.clone());
        self.result.clone()
    }
    async fn fetch_profile(&self, _: &str) -> Result<User, ApiError> {
        Err(ApiError::Unavailable)
    }
}

fn submit(result: Result<(), ApiError>) -> (SubmitOutcome, Option<SignupRequest>) {
    let received = Rc::new(RefCell::new(None));
    let session = AuthSession::new(
        MemorySessionStore::default(),
        SignupReply { result, received: received.clone() },
        Rc::new(RefCell::new(AuthState::Anonymous)),
    );
    let outcome = signup_outcome(block_on(session.signup(" John Doe ", "john@example.com", "Password123")));
    let request = received.borrow().clone();
    (outcome, request)
}

#[test]
fn submit_label_reflects_pending_request() {
    assert_eq!(submit_label(false), "Create Account");
    assert_eq!(submit_label(true), "Creating Account...");
}

#[test]
fn successful_signup_shows_confirmation_on_login() {
    let (outcome, _) = submit(Ok(()));
    assert_eq!(outcome, SubmitOutcome::Navigate("/login?registered=1"));
}

#[test]
fn duplicate_email_shows_signup_failed() {
    let (outcome, _) = submit(Err(ApiError::Rejected { status: 409 }));
    assert_eq!(outcome, SubmitOutcome::ShowError("Signup failed. Try different email."));
}

#[test]
fn fields_are_sent_as_typed() {
    let (_, request) = submit(Ok(()));
    let request = request.unwrap();
    assert_eq!(request.full_name, " John Doe ");
    assert_eq!(request.email, "john@example.com");
    assert_eq!(request.password, "Password123");
}
