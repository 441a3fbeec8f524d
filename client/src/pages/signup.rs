//! Account registration page.
//!
//! Signup never signs the user in; success sends them to `/login` with the
//! account-created notice.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::SubmitOutcome;
use crate::components::text_input::TextInput;
use crate::routes::{LOGIN_AFTER_SIGNUP_PATH, LOGIN_PATH};
use crate::state::session::{ActionFailed, use_auth_session};

/// Shown for every signup failure, duplicate email included.
pub const SIGNUP_FAILED: &str = "Signup failed. Try different email.";

fn submit_label(busy: bool) -> &'static str {
    if busy { "Creating Account..." } else { "Create Account" }
}

fn signup_outcome(result: Result<(), ActionFailed>) -> SubmitOutcome {
    match result {
        Ok(()) => SubmitOutcome::Navigate(LOGIN_AFTER_SIGNUP_PATH),
        Err(ActionFailed) => SubmitOutcome::ShowError(SIGNUP_FAILED),
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = use_auth_session();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(String::new());

        let name_value = full_name.get_untracked();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = session.signup(&name_value, &email_value, &password_value).await;
            busy.set(false);
            match signup_outcome(result) {
                SubmitOutcome::Navigate(path) => navigate(path, NavigateOptions::default()),
                SubmitOutcome::ShowError(message) => error.set(message.to_owned()),
            }
        });
    };

    view! {
        <div class="page page--centered">
            <div class="card">
                <h2 class="card__title">"Create Account"</h2>
                <form class="form" on:submit=on_submit>
                    <TextInput label="Full Name" placeholder="John Doe" value=full_name/>
                    <TextInput label="Email" input_type="email" placeholder="john@example.com" value=email/>
                    <TextInput label="Password" input_type="password" placeholder="Password123" value=password/>
                    <Show when=move || !error.get().is_empty()>
                        <p class="form__error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>
                <a class="btn btn--ghost" href=LOGIN_PATH>"Already have account? Sign In"</a>
            </div>
        </div>
    }
}
