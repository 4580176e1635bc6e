/// Reddit Reply Studio - browser client for keyword search, thread fetch
/// and AI reply generation
/// Built with Rust + WASM + Yew

pub mod api;
pub mod config;
pub mod controller;
mod markup;
pub mod models;
pub mod replies;
pub mod ui;
pub mod validation;

use wasm_bindgen::prelude::*;

use crate::config::ApiConfig;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Let host pages decide which trigger fits the current input
#[wasm_bindgen]
pub fn classify_input(text: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&validation::classify_input(text)).map_err(JsValue::from)
}

// Mount the app against the page origin
#[wasm_bindgen]
pub fn start_app() {
    let config = ApiConfig::from_window().unwrap_or_default();
    log::info!("Using API base {}", config.base());
    mount(config);
}

// Mount the app against an explicit backend base URL
#[wasm_bindgen]
pub fn start_app_with_api_base(base: &str) -> Result<(), JsValue> {
    let config = ApiConfig::parse(base)
        .map_err(|e| JsValue::from_str(&format!("Invalid API base {:?}: {}", base, e)))?;
    log::info!("Using API base {}", config.base());
    mount(config);
    Ok(())
}

fn mount(config: ApiConfig) {
    yew::Renderer::<ui::app::App>::with_props(ui::app::AppProps { config }).render();
}
