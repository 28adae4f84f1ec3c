//! Cart page (`cart.html`): one row per entry plus a totals box.

use crate::cart::totals::{resolve_lines, CartLine, CartTotals};
use crate::cart::CartEntry;
use crate::config::ShopConfig;
use crate::view::View;

use super::{escape_html, format_price};

pub const EMPTY_CART_HTML: &str = r#"<p class="muted">Your cart is empty.</p>"#;

pub fn cart_row_html(line: &CartLine, currency: &str) -> String {
    format!(
        r#"<div class="cart-item">
  <img src="{img}" width="80" height="80" style="border-radius:8px;object-fit:cover;">
  <div style="flex:1">
    <strong>{title}</strong>
    <div class="muted">{price} × {qty}</div>
  </div>
  <div>
    <button class="btn small remove-btn" data-id="{id}">Remove</button>
  </div>
</div>
"#,
        img = escape_html(line.image()),
        title = escape_html(line.title()),
        price = escape_html(&format_price(currency, line.unit_price())),
        qty = line.entry.qty,
        id = line.entry.id,
    )
}

pub fn cart_summary_html(totals: &CartTotals, currency: &str) -> String {
    let money = |v: u64| escape_html(&format_price(currency, v));
    format!(
        r#"<div style="background:var(--card);padding:1rem;border-radius:10px">
  <p>Subtotal: {sub}</p>
  <p>Shipping: {ship}</p>
  <h3>Total: {total}</h3>
  <div style="margin-top:1rem"><button class="btn">Checkout</button></div>
</div>
"#,
        sub = money(totals.subtotal),
        ship = money(totals.shipping),
        total = money(totals.total),
    )
}

/// Redraw the cart rows and the summary. Returns the totals, or `None` when
/// the cart is empty (the summary is cleared in that case).
pub fn render_cart_page<V: View>(area: &V, summary: Option<&V>, entries: &[CartEntry], config: &ShopConfig) -> Option<CartTotals> {
    if entries.is_empty() {
        area.set_html(EMPTY_CART_HTML);
        if let Some(summary) = summary {
            summary.set_html("");
        }
        return None;
    }

    let lines = resolve_lines(entries);
    let rows: String = lines.iter().map(|l| cart_row_html(l, &config.currency_symbol)).collect();
    area.set_html(&rows);

    let totals = CartTotals::compute(&lines, config.free_shipping_over, config.shipping_fee);
    if let Some(summary) = summary {
        summary.set_html(&cart_summary_html(&totals, &config.currency_symbol));
    }
    Some(totals)
}
