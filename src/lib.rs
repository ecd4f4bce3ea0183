//! # shell-navbar
//!
//! Leptos + WASM navigation header for a single-page application shell.
//! Renders the logo, hamburger toggle, app search, notifications and user
//! menu panels, and sends sessions without a user or a resolved location to
//! the login screens.
//!
//! Session retrieval, extension registration, layout classification and
//! routing are owned by the host; this crate reads them from Leptos context
//! (see [`app::provide_host_context`]).

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod extension;
pub mod net;
pub mod routing;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook and log sink, then hydrates
/// the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::hydrate_body(app::App);
}
