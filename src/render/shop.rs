//! Shop grid (`shop.html`), optionally filtered by `?cat=`.

use crate::catalog::{self, Category, Product};
use crate::view::View;

use super::{escape_html, format_price};

/// Label shown in `#catName` when no category is selected.
pub const ALL_LABEL: &str = "All";

/// Products whose category slug equals `category`. `None` (or an empty
/// parameter) means the whole catalog; a slug nobody uses gives an empty list.
pub fn filter_products(category: Option<&str>) -> Vec<&'static Product> {
    match category.filter(|c| !c.is_empty()) {
        None => catalog::products().iter().collect(),
        Some(slug) => match Category::from_slug(slug) {
            Some(category) => catalog::products().iter().filter(|p| p.category == category).collect(),
            None => Vec::new(),
        },
    }
}

pub fn product_card_html(product: &Product, currency: &str) -> String {
    let title = escape_html(product.title);
    format!(
        r#"<article class="card product-card">
  <img src="{img}" alt="{title}">
  <h3>{title}</h3>
  <p class="price">{price}</p>
  <div style="display:flex;gap:.5rem;margin-top:.6rem">
    <a class="btn small" href="product.html?id={id}">View</a>
    <button class="btn ghost small add-btn" data-id="{id}">Add</button>
  </div>
</article>
"#,
        img = escape_html(product.image),
        price = escape_html(&format_price(currency, product.price)),
        id = product.id,
    )
}

pub fn shop_grid_html(products: &[&Product], currency: &str) -> String {
    products.iter().map(|p| product_card_html(p, currency)).collect()
}

/// Fill the grid and the category label. Returns how many cards were drawn.
pub fn render_shop<V: View>(grid: &V, label: Option<&V>, category: Option<&str>, currency: &str) -> usize {
    let category = category.filter(|c| !c.is_empty());
    if let Some(label) = label {
        label.set_text(category.unwrap_or(ALL_LABEL));
    }
    let list = filter_products(category);
    grid.set_html(&shop_grid_html(&list, currency));
    list.len()
}
