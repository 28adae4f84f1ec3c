//! Product detail page (`product.html?id=N`).

use crate::catalog::{self, Product};
use crate::view::View;

use super::{format_price, parse_leading_u32};

/// Product for the `id` parameter; missing, unparsable or unknown ids fall
/// back to the first catalog entry.
pub fn resolve_product(id_param: Option<&str>) -> &'static Product {
    id_param
        .and_then(parse_leading_u32)
        .and_then(catalog::find)
        .unwrap_or_else(catalog::first)
}

/// Quantity typed into `#qty`. Anything that is not a positive integer is 1.
pub fn parse_quantity(raw: &str) -> u32 {
    parse_leading_u32(raw).unwrap_or(1).max(1)
}

/// Anchors of the detail page. Only the title is required to render.
pub struct ProductViews<V> {
    pub title: V,
    pub price: Option<V>,
    pub description: Option<V>,
    pub image: Option<V>,
}

pub fn render_product<V: View>(views: &ProductViews<V>, product: &Product, currency: &str) {
    views.title.set_text(product.title);
    if let Some(price) = &views.price {
        price.set_text(&format_price(currency, product.price));
    }
    if let Some(desc) = &views.description {
        desc.set_text(product.description);
    }
    if let Some(img) = &views.image {
        img.set_attribute("src", product.image);
    }
}
