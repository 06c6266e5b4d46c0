//! # client
//!
//! Leptos frontend for the Wireworks marketing site: landing page, catalog
//! browser, schematic viewer, brochure flip-book, contact form and cookie
//! consent. Rendered on the server (`ssr`) and hydrated in the browser
//! (`hydrate`).

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    util::reveal::mark_js_enabled();
    leptos::mount::hydrate_body(app::App);
}
