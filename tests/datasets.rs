// Catalog invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use holly_parcel::{Category, PRODUCTS};

#[test]
fn product_ids_are_unique_and_positive() {
    let mut seen = HashSet::new();
    for p in PRODUCTS.iter() {
        assert!(p.id > 0, "product '{}' has id 0", p.title);
        assert!(seen.insert(p.id), "duplicate id {} in PRODUCTS", p.id);
    }
}

#[test]
fn products_have_text_price_and_image() {
    for p in PRODUCTS.iter() {
        assert!(!p.title.trim().is_empty(), "empty title for id {}", p.id);
        assert!(!p.description.trim().is_empty(), "empty description for '{}'", p.title);
        assert!(p.price > 0, "'{}' is free", p.title);
        assert!(p.image.starts_with("assets/"), "image '{}' for '{}' outside assets/", p.image, p.title);
    }
}

#[test]
fn under1500_category_is_honest() {
    for p in PRODUCTS.iter().filter(|p| p.category == Category::Under1500) {
        assert!(p.price < 1500, "'{}' costs {} but is listed under1500", p.title, p.price);
    }
}

#[test]
fn every_category_has_a_product() {
    for c in Category::ALL {
        assert!(PRODUCTS.iter().any(|p| p.category == c), "category '{}' is empty", c);
    }
}
