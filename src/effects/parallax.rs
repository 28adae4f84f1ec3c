//! Hero parallax: each `.hero-layer` is shifted by `scrollY * data-speed`.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::dom::{self, ListenOptions};
use crate::error::Result;

/// Speed from a `data-speed` value, or `default` when missing or not a finite number.
/// Trailing text is ignored like `parseFloat`, so `"0.5px"` reads as 0.5.
pub fn layer_speed(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(leading_float).filter(|v| v.is_finite()).unwrap_or(default)
}

/// Longest `[+-]digits[.digits][e[+-]digits]` prefix after leading whitespace.
fn leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = if matches!(bytes.first(), Some(b'+' | b'-')) { 1 } else { 0 };
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}

pub fn layer_transform(scroll_y: f64, speed: f64) -> String {
    format!("translateY({}px)", scroll_y * speed)
}

pub fn install(win: &Window, doc: &Document, default_speed: f64) -> Result<()> {
    let Some(hero) = dom::query(doc, ".hero") else {
        return Ok(());
    };
    let layers: Vec<HtmlElement> = dom::query_all_in(&hero, ".hero-layer")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();
    if layers.is_empty() {
        return Ok(());
    }

    let win_scroll = win.clone();
    dom::listen_with(win, "scroll", ListenOptions { passive: true, once: false }, move |_| {
        let scroll_y = win_scroll.scroll_y().unwrap_or(0.0);
        for layer in &layers {
            let speed = layer_speed(layer.get_attribute("data-speed").as_deref(), default_speed);
            layer.style().set_property("transform", &layer_transform(scroll_y, speed)).ok();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_parsing() {
        assert_eq!(layer_speed(Some("0.5"), 0.3), 0.5);
        assert_eq!(layer_speed(Some(" -0.2 "), 0.3), -0.2);
        assert_eq!(layer_speed(None, 0.3), 0.3);
        assert_eq!(layer_speed(Some("fast"), 0.3), 0.3);
        assert_eq!(layer_speed(Some("NaN"), 0.3), 0.3);
    }

    #[test]
    fn speed_ignores_trailing_text() {
        assert_eq!(layer_speed(Some("0.5px"), 0.3), 0.5);
        assert_eq!(layer_speed(Some("+.25 slow"), 0.3), 0.25);
        assert_eq!(layer_speed(Some("2."), 0.3), 2.0);
        assert_eq!(layer_speed(Some("1e-1x"), 0.3), 0.1);
        assert_eq!(layer_speed(Some("4e"), 0.3), 4.0);
        assert_eq!(layer_speed(Some("-.x"), 0.3), 0.3);
        assert_eq!(layer_speed(Some("."), 0.3), 0.3);
    }

    #[test]
    fn transform_scales_scroll() {
        assert_eq!(layer_transform(100.0, 0.3), format!("translateY({}px)", 100.0 * 0.3));
        assert_eq!(layer_transform(200.0, 0.5), "translateY(100px)");
        assert_eq!(layer_transform(0.0, 0.3), "translateY(0px)");
    }
}
