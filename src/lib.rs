//! # koshpay-client
//!
//! Leptos + WASM frontend for the KoshPay peer-to-peer money-transfer
//! service: balance display, user directory search, transfers, transaction
//! history, and sign-in/sign-up.
//!
//! The client is a thin presentation layer over the remote HTTP API. Its
//! one structural piece is the session coordinator (`state::session` over
//! the `state::auth` machine), which owns the bearer token lifecycle and
//! feeds the route guards in `util::guard`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
