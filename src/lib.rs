//! Holly Parcel storefront page behaviors.
//!
//! One WASM bundle is loaded by every page of the shop. `start_site()` runs
//! after `DOMContentLoaded` and brings up whatever the current template has
//! anchors for: snowfall, hero parallax, the mobile menu, the music toggle,
//! the shop grid, the product page and the cart page. The cart lives in
//! `localStorage` under a single key.

use wasm_bindgen::prelude::*;

pub mod cart;
pub mod catalog;
pub mod config;
pub mod dom;
pub mod effects;
pub mod error;
pub mod logging;
pub mod render;
pub mod site;
pub mod storage;
pub mod view;

pub use cart::{CartEntry, CartStore, CartTotals};
pub use catalog::{Category, PRODUCTS, Product};
pub use config::ShopConfig;
pub use error::ShopError;
pub use storage::{KeyValueStore, MemoryStore, WebStorage};
pub use view::{RecordingView, View};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Start every page behavior with the default configuration.
#[wasm_bindgen]
pub fn start_site() -> Result<(), JsValue> {
    run(ShopConfig::default())
}

/// Like `start_site`, with a JSON object overriding config fields.
#[wasm_bindgen]
pub fn start_site_with_config(json: &str) -> Result<(), JsValue> {
    run(ShopConfig::from_json(json)?)
}

fn run(config: ShopConfig) -> Result<(), JsValue> {
    logging::init(&config.log_level);
    site::start(config)?;
    Ok(())
}

/// Add `qty` of product `id` and return the new item count. Before
/// `start_site` this only touches storage.
#[wasm_bindgen]
pub fn add_to_cart(id: u32, qty: u32) -> Result<u32, JsValue> {
    let count = match site::current() {
        Some(site) => site.add_to_cart(id, qty)?,
        None => site::page_cart(&ShopConfig::default().cart_key).add(id, qty)?,
    };
    Ok(count)
}

#[wasm_bindgen]
pub fn cart_count() -> u32 {
    match site::current() {
        Some(site) => site.cart().count(),
        None => site::page_cart(&ShopConfig::default().cart_key).count(),
    }
}
