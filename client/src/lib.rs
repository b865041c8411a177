//! # client
//!
//! Leptos frontend for the PT Cipta Metalindo Persada marketing site.
//! Compiled twice: with `ssr` into the server binary for HTML rendering,
//! and with `hydrate` into the WASM bundle that takes the page over in the
//! browser.
//!
//! This crate contains pages, components, client state, translation
//! tables, static site content and the small amount of browser glue the
//! site needs (locale persistence, scroll and intersection observers, the
//! contact form POST).

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attaches to the server-rendered `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
