//! Web UI for labcalc
//!
//! A Yew-based front end for the laboratory calculators. Each calculator
//! form posts to the calculation backend and renders the answer in its own
//! result panel.

pub mod app;
pub mod calculators;
pub mod client;
pub mod clipboard;
pub mod components;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("labcalc UI starting");

    yew::Renderer::<app::App>::new().render();
}
