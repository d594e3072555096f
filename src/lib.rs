//! # newswire-client
//!
//! Leptos + WASM frontend for the Newswire portal. Server-side rendered per
//! request and hydrated in the browser.
//!
//! All data lives behind a remote HTTP API that answers with a uniform
//! `{success, data?, message?, pagination?}` envelope. This crate contains
//! pages, components, the session/auth state controller, the typed API
//! services, and the request pipeline that attaches the bearer token.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
