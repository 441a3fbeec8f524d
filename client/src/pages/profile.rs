//! Profile page for any signed-in user.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::session::use_auth_session;

/// Label/value rows rendered for the signed-in user.
fn profile_rows(user: &User) -> [(&'static str, String); 3] {
    [
        ("Name", user.full_name.clone()),
        ("Email", user.email.clone()),
        ("Role", user.role.to_string()),
    ]
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = *use_auth_session().state_cell();

    let rows = move || {
        auth.get()
            .user()
            .map(profile_rows)
            .into_iter()
            .flatten()
            .map(|(label, value)| {
                view! {
                    <div class="profile__row">
                        <span class="profile__label">{label}</span>
                        <span class="profile__value">{value}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <div class="card card--wide">
                <h1 class="page__title">"Profile"</h1>
                {rows}
                <p class="profile__note">"Profile management coming soon!"</p>
            </div>
        </div>
    }
}
