//! # scout-client
//!
//! Leptos + WASM frontend for browsing forestry properties: a parcel search
//! with a preview card, purchase flow, detail charts and a paginated stand
//! table, plus the organization's purchased properties.
//!
//! Domain models and pure derivations live in the `forest` crate; this crate
//! holds view state, the GraphQL transport and the components.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
