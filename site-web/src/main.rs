//! Bond Offering Site - Leptos Frontend
//!
//! Single-page lead-generation site. All state rules live in `shared`; this
//! crate binds them to the DOM.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod services;
mod state;
pub mod utils;

use app::App;
use shared::market::{MarketConfig, DEFAULT_MARKET};
use utils::constants::{MARKET_QUERY_PARAM, STATIC_LOADER_ID};
use utils::url::get_query_param;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Bond offering site starting...");

    let market_id = get_query_param(MARKET_QUERY_PARAM).unwrap_or_else(|| DEFAULT_MARKET.to_string());
    let market = match MarketConfig::builtin(&market_id) {
        Ok(market) => market,
        Err(err) => {
            log::warn!("{err}, falling back to '{DEFAULT_MARKET}'");
            match MarketConfig::builtin(DEFAULT_MARKET) {
                Ok(market) => market,
                Err(err) => {
                    log::error!("Default market failed to load: {err}");
                    return;
                }
            }
        }
    };
    log::info!("Market '{}' loaded with {} offerings", market.market_id, market.catalog.len());

    // The Leptos splash takes over from the static HTML loader
    hide_static_loader();

    leptos::mount::mount_to_body(move || view! { <App market=market/> });
}

/// Hide the placeholder shown by index.html while the WASM bundle downloads.
fn hide_static_loader() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::warn!("No document available, cannot hide static loader");
        return;
    };

    match document.get_element_by_id(STATIC_LOADER_ID) {
        Some(loader) => {
            if let Err(e) = loader.class_list().add_1("hidden") {
                log::warn!("Failed to add 'hidden' class to static loader: {e:?}");
            }
            if let Err(e) = loader.set_attribute("style", "display: none !important;") {
                log::warn!("Failed to set style on static loader: {e:?}");
            }
            log::debug!("Static loader hidden");
        }
        None => log::debug!("No element with id '{STATIC_LOADER_ID}'"),
    }
}
