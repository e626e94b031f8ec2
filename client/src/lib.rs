//! # client
//!
//! Leptos + WASM front-end for the agora community site.
//!
//! Feature state (to-do list, messages, reactions, notification dismissals,
//! settings) lives in `localstate` stores wrapped in reactive signals and
//! mirrored to browser `localStorage`. Server rendering never touches storage:
//! stores hydrate from an effect, which only runs in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console_log init failed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
