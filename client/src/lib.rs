//! # client
//!
//! Leptos frontend for the portfolio page. Rendered on the server for the
//! first paint and hydrated in the browser for search, tabs and copy buttons.
//!
//! Page content comes from the `content` crate; this crate only composes it
//! into views and owns the transient UI state.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the reactive runtime to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
