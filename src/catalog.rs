//! Fixed product catalog.
//!
//! Prices are integer minor units. The table is the whole inventory; there is
//! no remote product feed.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Under1500,
    Decor,
    Ornaments,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Under1500, Category::Decor, Category::Ornaments];

    /// Slug used by the `cat` query parameter.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Under1500 => "under1500",
            Category::Decor => "decor",
            Category::Ornaments => "ornaments",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub title: &'static str,
    pub price: u32,
    pub image: &'static str,
    pub category: Category,
    pub description: &'static str,
}

pub static PRODUCTS: [Product; 4] = [
    Product {
        id: 1,
        title: "Cozy Gift Box",
        price: 1499,
        image: "assets/giftbox.jpg",
        category: Category::Under1500,
        description: "Candle, cocoa mix, wool socks, ribbon wrap.",
    },
    Product {
        id: 2,
        title: "Handmade Wreath",
        price: 899,
        image: "assets/wreath.jpg",
        category: Category::Decor,
        description: "Fresh-looking handcrafted wreath.",
    },
    Product {
        id: 3,
        title: "Glass Ornament (set of 3)",
        price: 599,
        image: "assets/ornament.jpg",
        category: Category::Ornaments,
        description: "Delicate hand-painted ornaments.",
    },
    Product {
        id: 4,
        title: "Holiday Candle",
        price: 349,
        image: "assets/candle.jpg",
        category: Category::Under1500,
        description: "Scented soy candle — cinnamon & orange.",
    },
];

pub fn products() -> &'static [Product] {
    &PRODUCTS
}

pub fn find(id: u32) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// First catalog entry; the fallback for unresolvable product ids.
pub fn first() -> &'static Product {
    &PRODUCTS[0]
}
