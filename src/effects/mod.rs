//! Page-wide behaviors that do not touch the catalog or the cart.
//!
//! Each `install` looks for its anchors and quietly does nothing when they
//! are absent, so one bundle serves every page template.

pub mod music;
pub mod nav;
pub mod parallax;
pub mod snow;
pub mod toast;
pub mod year;

use tracing::warn;
use web_sys::{Document, Window};

use crate::config::ShopConfig;

/// Install every ambient effect. A failing effect is logged and skipped.
pub fn install_all(win: &Window, doc: &Document, config: &ShopConfig) {
    let results = [
        ("snow", snow::install(win, doc, config.max_flakes)),
        ("parallax", parallax::install(win, doc, config.parallax_default_speed)),
        ("nav", nav::install(win, doc, config.mobile_breakpoint)),
        ("music", music::install(win, doc)),
    ];
    for (name, result) in results {
        if let Err(err) = result {
            warn!(effect = name, %err, "effect not installed");
        }
    }
    year::install(doc);
}
