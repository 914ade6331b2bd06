pub mod app;
pub mod domain;
pub mod shared;
pub mod usecases;

use contracts::shared::config::StorefrontConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let config = shared::page_config();
    let level = config
        .as_ref()
        .map(StorefrontConfig::log_level)
        .unwrap_or(log::Level::Debug);
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    let config = config.unwrap_or_else(|e| {
        log::error!("{}; using default configuration", e);
        StorefrontConfig::default()
    });
    match shared::dom::document() {
        Some(document) if document.ready_state() == "loading" => {
            shared::dom::listen(&document, "DOMContentLoaded", move |_| app::run(&config));
        }
        _ => app::run(&config),
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
