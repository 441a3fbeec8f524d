//! Login page: email + password against the session manager.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use super::SubmitOutcome;
use crate::components::text_input::TextInput;
use crate::routes::{DASHBOARD_PATH, SIGNUP_PATH};
use crate::state::session::{ActionFailed, use_auth_session};

/// Shown for every login failure, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const ACCOUNT_CREATED: &str = "Account created! You can now login.";

fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing In..." } else { "Sign In" }
}

fn login_outcome(result: Result<(), ActionFailed>) -> SubmitOutcome {
    match result {
        Ok(()) => SubmitOutcome::Navigate(DASHBOARD_PATH),
        Err(ActionFailed) => SubmitOutcome::ShowError(INVALID_CREDENTIALS),
    }
}

/// Whether the `registered` query flag set by the signup page is present.
fn registered_notice(flag: Option<&str>) -> bool {
    matches!(flag, Some("1" | "true"))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_auth_session();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let show_registered = move || query.with(|q| registered_notice(q.get("registered").as_deref()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(String::new());

        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = session.login(&email_value, &password_value).await;
            busy.set(false);
            match login_outcome(result) {
                SubmitOutcome::Navigate(path) => navigate(path, NavigateOptions::default()),
                SubmitOutcome::ShowError(message) => error.set(message.to_owned()),
            }
        });
    };

    view! {
        <div class="page page--centered">
            <div class="card">
                <h2 class="card__title">"Login"</h2>
                <Show when=show_registered>
                    <p class="notice">{ACCOUNT_CREATED}</p>
                </Show>
                <form class="form" on:submit=on_submit>
                    <TextInput label="Email" input_type="email" placeholder="john@example.com" value=email/>
                    <TextInput label="Password" input_type="password" placeholder="Password123" value=password/>
                    <Show when=move || !error.get().is_empty()>
                        <p class="form__error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>
                <a class="btn btn--ghost" href=SIGNUP_PATH>"Create Account"</a>
            </div>
        </div>
    }
}
