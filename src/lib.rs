//! # roomchat
//!
//! Room chat client over a JSON WebSocket protocol.
//!
//! The crate holds the session core shared by every front end (`state`,
//! `net`, `config`) and a Leptos client-side-rendered view (`app`,
//! `components`). Browser-only code is gated behind the `csr` feature; the
//! rest compiles and tests natively. The terminal front end lives in the
//! sibling `cli` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod state;

/// WASM entry point: install browser logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
