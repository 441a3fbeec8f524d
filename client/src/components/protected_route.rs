//! Guarded wrapper for route views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders through this component so the redirect
//! policy in `util::auth::evaluate` is applied identically everywhere.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::state::session::use_auth_session;
use crate::util::auth::{Access, GuardDecision, evaluate};

/// Neutral placeholder shown while the startup session check is pending.
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <div class="spinner" role="status" aria-label="Loading"></div>
        </div>
    }
}

/// Render `children` only when the current session satisfies `access`.
#[component]
pub fn ProtectedRoute(access: Access, children: ChildrenFn) -> impl IntoView {
    let auth = *use_auth_session().state_cell();

    move || match evaluate(&auth.get(), &access) {
        GuardDecision::Loading => view! { <LoadingSpinner/> }.into_any(),
        GuardDecision::Redirect(path) => {
            let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
            view! { <Redirect path=path options=options/> }.into_any()
        }
        GuardDecision::Render => children(),
    }
}
