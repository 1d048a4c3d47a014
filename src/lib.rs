/// Tab Strip - browser chrome with a tab bar and URL bar
/// Built with Rust + WASM + Yew

mod address;
mod config;
mod errors;
mod host;
mod shortcuts;
mod tab_data;
pub mod tab_strip;
pub mod ui;

pub use config::BrowserConfig;
pub use errors::TabError;
pub use tab_data::{Tab, TabEntry};

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export URL bar resolution for JavaScript access
#[wasm_bindgen]
pub fn resolve_input(input: &str) -> Option<String> {
    address::resolve_input(input, &BrowserConfig::default())
}

// Start the browser chrome with default settings
#[wasm_bindgen]
pub fn start_browser() {
    yew::Renderer::<ui::browser::App>::new().render();
}

// Start the browser chrome with settings from a JS object
#[wasm_bindgen]
pub fn start_browser_with_config(config: JsValue) {
    let config = BrowserConfig::from_js(config).unwrap_or_else(|e| {
        log::error!("{}, using defaults", e);
        BrowserConfig::default()
    });

    yew::Renderer::<ui::browser::App>::with_props(ui::browser::AppProps { config }).render();
}
