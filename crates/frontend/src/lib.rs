//! Project Board - Yew WASM Frontend
//!
//! Renders the project list, the new-project form and the login page.
//! All request and notification logic lives in `project_client`; this
//! crate provides the browser ports and the components.

mod app;
mod components;
mod config;
mod http;
mod pages;
mod storage;
mod view;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("project board starting");

    yew::Renderer::<App>::new().render();
}
