//! Top bar with the signed-in identity and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above every route; hidden entirely while nobody is signed in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_auth_session;

pub const BRAND_NAME: &str = "Purple Merit Technologies";
pub const BRAND_MARK: &str = "PM";

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_auth_session();
    let auth = *session.state_cell();
    let navigate = use_navigate();

    move || {
        let user = auth.get().user().cloned()?;
        let session = session.clone();
        let navigate = navigate.clone();
        let on_logout = move |_| {
            let path = session.logout();
            navigate(path, NavigateOptions::default());
        };

        Some(view! {
            <nav class="navbar">
                <div class="navbar__brand">
                    <span class="navbar__mark">{BRAND_MARK}</span>
                    <h1 class="navbar__title">{BRAND_NAME}</h1>
                </div>
                <div class="navbar__session">
                    <span class="navbar__user">
                        {user.full_name}
                        <span class="badge">{user.role.to_string()}</span>
                    </span>
                    <button class="btn" on:click=on_logout>"Logout"</button>
                </div>
            </nav>
        })
    }
}
