//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::net::api::HttpAuthApi;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, profile::ProfilePage, signup::SignupPage};
use crate::routes::{AppRoute, LOGIN_PATH};
use crate::state::auth::AuthState;
use crate::state::session::BrowserAuthSession;
use crate::util::auth::Access;
use crate::util::session_store::LocalSessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and kicks off the one-time startup check,
/// then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Same-origin API: the server forwards `/api/*` upstream.
    let auth = RwSignal::new(AuthState::Loading);
    let session: BrowserAuthSession = BrowserAuthSession::new(LocalSessionStore, HttpAuthApi, auth);
    provide_context(session.clone());

    // Effects only run in the browser, so SSR always renders `Loading`.
    Effect::new(move |_| {
        let session = session.clone();
        leptos::task::spawn_local(async move { session.restore().await });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Purple Merit Technologies"/>

        <Router>
            <Navbar/>
            <main class="app">
                <Routes fallback=|| view! { <Redirect path=LOGIN_PATH/> }>
                    <Route path=StaticSegment(AppRoute::Login.segment()) view=|| view! { <RouteView route=AppRoute::Login/> }/>
                    <Route path=StaticSegment(AppRoute::Signup.segment()) view=|| view! { <RouteView route=AppRoute::Signup/> }/>
                    <Route
                        path=StaticSegment(AppRoute::Dashboard.segment())
                        view=|| view! { <RouteView route=AppRoute::Dashboard/> }
                    />
                    <Route
                        path=StaticSegment(AppRoute::Profile.segment())
                        view=|| view! { <RouteView route=AppRoute::Profile/> }
                    />
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=LOGIN_PATH/> }/>
                </Routes>
            </main>
        </Router>
    }
}

/// The page for `route`, behind the guard its access level requires.
#[component]
fn RouteView(route: AppRoute) -> impl IntoView {
    let page = move || match route {
        AppRoute::Login => view! { <LoginPage/> }.into_any(),
        AppRoute::Signup => view! { <SignupPage/> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage/> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage/> }.into_any(),
    };
    match route.access() {
        Access::Public => page(),
        access => view! { <ProtectedRoute access=access>{page()}</ProtectedRoute> }.into_any(),
    }
}
