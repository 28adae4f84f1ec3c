// Integration tests (native) for the `holly-parcel` crate.
// These tests avoid wasm-specific functionality and drive the cart and the
// renderers through the in-memory store and view so they run under
// `cargo test` on the host.

use holly_parcel::cart::totals::resolve_lines;
use holly_parcel::render::{cart_page, escape_html, product, refresh_cart_counts, shop};
use holly_parcel::{CartEntry, CartStore, CartTotals, KeyValueStore, MemoryStore, RecordingView, ShopConfig, View};

fn cart(store: &MemoryStore) -> CartStore<&MemoryStore> {
    CartStore::new(store, ShopConfig::default().cart_key)
}

#[test]
fn add_twice_then_render_cart_page() {
    let store = MemoryStore::new();
    let c = cart(&store);
    c.add(1, 1).unwrap();
    let count = c.add(1, 2).unwrap();
    assert_eq!(count, 3);
    assert_eq!(c.load(), vec![CartEntry { id: 1, qty: 3 }]);

    let area = RecordingView::new();
    let summary = RecordingView::new();
    let totals = cart_page::render_cart_page(&area, Some(&summary), &c.load(), &ShopConfig::default()).unwrap();
    assert_eq!(totals, CartTotals { subtotal: 4497, shipping: 0, total: 4497 });
    assert_eq!(area.html().matches("cart-item").count(), 1);
    assert!(summary.html().contains("Total: ₹4497"));
}

#[test]
fn cart_survives_a_new_page_view() {
    let store = MemoryStore::new();
    cart(&store).add(2, 1).unwrap();
    cart(&store).add(3, 4).unwrap();
    // a fresh store handle over the same storage sees the same cart
    let again = cart(&store);
    assert_eq!(again.count(), 5);
}

#[test]
fn remove_then_rerender_shows_empty_cart() {
    let store = MemoryStore::new();
    let c = cart(&store);
    c.add(4, 1).unwrap();
    assert_eq!(c.remove(4).unwrap(), 0);

    let area = RecordingView::new();
    let summary = RecordingView::new();
    assert!(cart_page::render_cart_page(&area, Some(&summary), &c.load(), &ShopConfig::default()).is_none());
    assert_eq!(area.html(), cart_page::EMPTY_CART_HTML);
    assert_eq!(summary.html(), "");
}

#[test]
fn remove_unknown_id_keeps_storage_bytes() {
    let store = MemoryStore::new();
    let c = cart(&store);
    c.add(1, 1).unwrap();
    c.add(2, 2).unwrap();
    let before = store.get(c.key());
    c.remove(999).unwrap();
    assert_eq!(store.get(c.key()), before);
}

#[test]
fn shipping_threshold_examples() {
    let cfg = ShopConfig::default();
    let one = CartTotals::compute(&resolve_lines(&[CartEntry { id: 1, qty: 1 }]), cfg.free_shipping_over, cfg.shipping_fee);
    assert_eq!((one.subtotal, one.shipping, one.total), (1499, 99, 1598));
    let two = CartTotals::compute(&resolve_lines(&[CartEntry { id: 1, qty: 2 }]), cfg.free_shipping_over, cfg.shipping_fee);
    assert_eq!((two.subtotal, two.shipping, two.total), (2998, 0, 2998));
}

#[test]
fn garbage_in_storage_reads_as_empty() {
    for raw in ["", "null", "[{\"id\":\"one\"}]", "<html>", "[1,2,3]"] {
        let store = MemoryStore::with("hp_cart_v1", raw);
        let c = cart(&store);
        assert!(c.load().is_empty(), "value {raw:?} should load empty");
        assert_eq!(c.count(), 0);
    }
}

#[test]
fn missing_key_counts_zero_and_badges_follow() {
    let store = MemoryStore::new();
    let badges = [RecordingView::with_text("7"), RecordingView::new()];
    refresh_cart_counts(&badges, cart(&store).count());
    assert!(badges.iter().all(|b| b.text() == "0"));
}

#[test]
fn shop_grid_for_unknown_category_is_empty_not_an_error() {
    let grid = RecordingView::new();
    assert_eq!(shop::render_shop(&grid, None, Some("reindeer"), "₹"), 0);
    assert_eq!(grid.html(), "");
}

#[test]
fn product_page_falls_back_to_first_product() {
    let views = product::ProductViews { title: RecordingView::new(), price: None, description: None, image: None };
    product::render_product(&views, product::resolve_product(Some("12345")), "₹");
    assert_eq!(views.title.text(), "Cozy Gift Box");
}

#[test]
fn markup_never_contains_raw_specials_from_text() {
    let hostile = "<script>alert('x')</script> & \"more\"";
    let escaped = escape_html(hostile);
    for raw in ['<', '>', '"', '\''] {
        assert!(!escaped.contains(raw), "{raw} survived escaping");
    }
    assert!(!escaped.replace("&amp;", "").replace("&lt;", "").replace("&gt;", "").replace("&quot;", "").replace("&#39;", "").contains('&'));
}
