//! # fooddelivery-web
//!
//! Leptos + WASM frontend for the food-delivery marketplace.
//!
//! This crate contains pages, components, application state, the REST
//! client, and the geocoding/geolocation bridges used by the coordinate
//! picker. The backend is external; everything here talks to it over HTTP.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the root component.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
