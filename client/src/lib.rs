//! # ipv6insight-ui
//!
//! Leptos + WASM frontend for IPv6Insight: a browser-side IPv6 connectivity
//! test, regional adoption charts, and an AI assistant backed by the server's
//! `/api/ask` endpoint.
//!
//! The `ssr` feature renders the same components on the server; `hydrate`
//! builds the WASM bundle that takes over in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point invoked by the hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
