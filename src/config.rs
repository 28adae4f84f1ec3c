//! Site configuration.
//!
//! Defaults reproduce the live storefront. A page may override any subset by
//! calling `start_site_with_config` with a JSON object.

use serde::Deserialize;

use crate::error::Result;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShopConfig {
    /// `localStorage` key holding the serialized cart.
    pub cart_key: String,
    pub currency_symbol: String,
    /// Subtotals strictly above this ship free.
    pub free_shipping_over: u32,
    pub shipping_fee: u32,
    /// Viewport width (px) at or below which nav links close the menu.
    pub mobile_breakpoint: f64,
    /// Parallax factor for layers without a usable `data-speed`.
    pub parallax_default_speed: f64,
    pub max_flakes: usize,
    pub toast_fade_ms: i32,
    pub toast_remove_ms: i32,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub log_level: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            cart_key: "hp_cart_v1".to_owned(),
            currency_symbol: "₹".to_owned(),
            free_shipping_over: 1999,
            shipping_fee: 99,
            mobile_breakpoint: 768.0,
            parallax_default_speed: 0.3,
            max_flakes: 220,
            toast_fade_ms: 1400,
            toast_remove_ms: 2000,
            log_level: "info".to_owned(),
        }
    }
}

impl ShopConfig {
    /// Parse JSON overrides on top of the defaults. Empty input means defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = ShopConfig::from_json(r#"{"shipping_fee": 150, "cart_key": "test_cart"}"#).unwrap();
        assert_eq!(cfg.shipping_fee, 150);
        assert_eq!(cfg.cart_key, "test_cart");
        assert_eq!(cfg.free_shipping_over, 1999);
        assert_eq!(cfg.max_flakes, 220);
    }

    #[test]
    fn blank_input_is_default() {
        assert_eq!(ShopConfig::from_json("  ").unwrap(), ShopConfig::default());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(ShopConfig::from_json("{not json").is_err());
    }
}
