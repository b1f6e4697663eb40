//! # plotchat-ui
//!
//! Leptos + WASM browser front end for the data chat service.
//!
//! The chat view keeps a `RwSignal<plotchat::ChatState>` in context and runs
//! the core transitions around `gloo-net` calls. Plots are drawn by the page's
//! global `Plotly` object. Build with the `csr` feature (e.g. `trunk serve`);
//! without it the crate still compiles natively with network calls stubbed.

pub mod app;
pub mod components;
pub mod net;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
