//! # portal-client
//!
//! Leptos + WASM frontend for the Purple Merit internal portal: login,
//! signup, an admin dashboard, and a profile view behind a session gate.
//!
//! All business logic lives in the remote API. This crate holds the session
//! token bookkeeping (`util::session_store`, `state::session`), the route
//! guard (`util::auth`), the REST client (`net`), and the views.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
