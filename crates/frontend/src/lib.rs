//! Classboard - Yew WASM Frontend
//!
//! This crate provides the web UI for the Classboard instructor portal.

mod app;
mod components;
mod config;
mod data;
mod pages;
mod session;
mod store;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
