//! Markup renderers for the shop grid, product page and cart page.
//!
//! Each renderer rebuilds its whole region from the catalog, the cart and the
//! query string on every call. Anything that came from data goes through
//! [`escape_html`] before it lands in markup.

use crate::view::View;

pub mod cart_page;
pub mod product;
pub mod shop;

/// Escape `& < > " '` for use in element text or a quoted attribute.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn format_price(currency: &str, amount: impl Into<u64>) -> String {
    format!("{currency}{}", amount.into())
}

/// Write the cart item count into every badge.
pub fn refresh_cart_counts<V: View>(badges: &[V], count: u32) {
    let text = count.to_string();
    for badge in badges {
        badge.set_text(&text);
    }
}

/// JS `parseInt` over the leading digits, e.g. `"3 pcs"` → 3 and `"+3"` → 3.
/// A minus sign or no leading digit gives `None`.
pub fn parse_leading_u32(raw: &str) -> Option<u32> {
    let rest = raw.trim_start();
    let rest = rest.strip_prefix('+').unwrap_or(rest);
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    rest[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::RecordingView;

    #[test]
    fn escapes_the_five_specials() {
        assert_eq!(escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;");
    }

    #[test]
    fn leaves_other_text_alone() {
        assert_eq!(escape_html("Scented soy candle — cinnamon"), "Scented soy candle — cinnamon");
    }

    #[test]
    fn price_uses_symbol_prefix() {
        assert_eq!(format_price("₹", 1499u32), "₹1499");
        assert_eq!(format_price("$", 0u64), "$0");
    }

    #[test]
    fn counts_written_to_all_badges() {
        let badges = [RecordingView::new(), RecordingView::with_text("9")];
        refresh_cart_counts(&badges, 3);
        assert!(badges.iter().all(|b| b.text() == "3"));
    }

    #[test]
    fn leading_int_parsing() {
        assert_eq!(parse_leading_u32("3"), Some(3));
        assert_eq!(parse_leading_u32(" 12abc"), Some(12));
        assert_eq!(parse_leading_u32("abc"), None);
        assert_eq!(parse_leading_u32("-2"), None);
        assert_eq!(parse_leading_u32(""), None);
        assert_eq!(parse_leading_u32("+3"), Some(3));
        assert_eq!(parse_leading_u32("+"), None);
        assert_eq!(parse_leading_u32("++3"), None);
    }
}
