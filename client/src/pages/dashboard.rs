//! Admin dashboard. Reachable only through the admin route guard.

use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Admin Dashboard"</h1>
            <div class="card card--wide">
                <h2>"Setup Complete!"</h2>
                <p>"Create users via signup and they will appear here."</p>
            </div>
        </div>
    }
}
