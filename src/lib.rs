//! FlipCut - AI background removal and image flipping
//!
//! Marketing site for FlipCut, built with Leptos and WebAssembly: a landing
//! page with animated effects, a dashboard entry point and the login redirect.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
