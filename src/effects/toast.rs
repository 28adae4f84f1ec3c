//! Short "Added to cart" notice in the bottom-right corner.

use web_sys::{Document, Window};

use crate::dom;
use crate::error::{Result, ShopError};

pub const ADDED_MESSAGE: &str = "Added to cart";

const TOAST_STYLE: &str = "position:fixed; right:20px; bottom:20px; background:rgba(0,0,0,0.7); color:#fff; padding:.6rem .9rem; border-radius:8px; z-index:9999; transition:opacity .4s ease;";

/// Show `msg`, fade it after `fade_ms` and drop it after `remove_ms`.
pub fn show(win: &Window, doc: &Document, msg: &str, fade_ms: i32, remove_ms: i32) -> Result<()> {
    let Some(body) = doc.body() else {
        return Ok(());
    };
    let toast = doc.create_element("div").map_err(ShopError::dom)?;
    toast.set_text_content(Some(msg));
    toast.set_attribute("style", TOAST_STYLE).map_err(ShopError::dom)?;
    body.append_child(&toast).map_err(ShopError::dom)?;

    let fading = toast.clone();
    dom::set_timeout(win, fade_ms, move || {
        let style = format!("{TOAST_STYLE} opacity:0;");
        fading.set_attribute("style", &style).ok();
    })?;
    dom::set_timeout(win, remove_ms, move || toast.remove())
}
