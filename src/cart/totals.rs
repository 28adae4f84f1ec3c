//! Cart lines joined against the catalog, and the order totals.

use crate::catalog::{self, Product};

use super::CartEntry;

/// Title shown for an entry whose product is no longer in the catalog.
pub const MISSING_TITLE: &str = "Item";
pub const MISSING_IMAGE: &str = "assets/giftbox.jpg";

/// A cart entry resolved for display. `product` is `None` for ids the catalog
/// does not know; such lines show a placeholder and price 0.
#[derive(Debug, Clone, Copy)]
pub struct CartLine {
    pub entry: CartEntry,
    pub product: Option<&'static Product>,
}

impl CartLine {
    pub fn resolve(entry: CartEntry) -> Self {
        Self { entry, product: catalog::find(entry.id) }
    }

    pub fn title(&self) -> &'static str {
        self.product.map_or(MISSING_TITLE, |p| p.title)
    }

    pub fn unit_price(&self) -> u32 {
        self.product.map_or(0, |p| p.price)
    }

    pub fn image(&self) -> &'static str {
        self.product.map_or(MISSING_IMAGE, |p| p.image)
    }

    pub fn line_total(&self) -> u64 {
        u64::from(self.unit_price()) * u64::from(self.entry.qty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: u64,
    pub shipping: u64,
    pub total: u64,
}

impl CartTotals {
    /// Shipping is `shipping_fee` unless the subtotal is strictly above
    /// `free_over`.
    pub fn compute(lines: &[CartLine], free_over: u32, shipping_fee: u32) -> Self {
        let subtotal: u64 = lines.iter().map(CartLine::line_total).sum();
        let shipping = if subtotal > u64::from(free_over) { 0 } else { u64::from(shipping_fee) };
        Self { subtotal, shipping, total: subtotal + shipping }
    }
}

pub fn resolve_lines(entries: &[CartEntry]) -> Vec<CartLine> {
    entries.iter().copied().map(CartLine::resolve).collect()
}
