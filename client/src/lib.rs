//! # client
//!
//! Leptos front end of the Martin Greenwood consultancy site, rendered on the
//! server and hydrated in the browser.
//!
//! The crate holds the route table and navigator, per-route SEO metadata, the
//! light/dark theme store, the booking dialog channel, and the pages and
//! components they drive. Browser-only pieces compile under the `hydrate`
//! feature; the `ssr` feature adds what the Axum host needs.

pub mod app;
pub mod components;
pub mod pages;
pub mod routing;
pub mod seo;
pub mod state;
pub mod theme;
pub mod util;

/// WASM entry point: install error reporting and hydrate the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    util::error_handler::install();
    leptos::mount::hydrate_body(app::App);
}
