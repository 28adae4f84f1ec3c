//! Page wiring: find anchors, render, attach listeners.
//!
//! One [`Site`] per page view, shared by the listeners through `Rc`. The
//! renderers and effects never look at `localStorage` or the URL themselves;
//! they get what they need from here.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, UrlSearchParams, Window};

use crate::cart::CartStore;
use crate::config::ShopConfig;
use crate::dom;
use crate::effects::{self, toast};
use crate::error::Result;
use crate::render::{self, cart_page, product, shop};
use crate::storage::{KeyValueStore, MemoryStore, WebStorage};

pub type PageCart = CartStore<Box<dyn KeyValueStore>>;

pub struct Site {
    win: Window,
    doc: Document,
    config: ShopConfig,
    cart: PageCart,
}

thread_local! {
    static SITE: RefCell<Option<Rc<Site>>> = const { RefCell::new(None) };
}

/// The running page, if `start` has completed.
pub fn current() -> Option<Rc<Site>> {
    SITE.with(|s| s.borrow().clone())
}

/// Cart backed by `localStorage`, or by memory when the browser refuses it.
pub fn page_cart(key: &str) -> PageCart {
    let store: Box<dyn KeyValueStore> = if WebStorage::available() {
        Box::new(WebStorage)
    } else {
        warn!("localStorage unavailable; cart will not persist");
        Box::new(MemoryStore::new())
    };
    CartStore::new(store, key)
}

impl Site {
    pub fn new(config: ShopConfig) -> Result<Rc<Self>> {
        let win = dom::window()?;
        let doc = dom::document()?;
        let cart = page_cart(&config.cart_key);
        Ok(Rc::new(Self { win, doc, config, cart }))
    }

    pub fn cart(&self) -> &PageCart {
        &self.cart
    }

    fn query_param(&self, name: &str) -> Option<String> {
        let search = self.win.location().search().ok()?;
        UrlSearchParams::new_with_str(&search).ok()?.get(name)
    }

    pub fn refresh_counts(&self, count: u32) {
        render::refresh_cart_counts(&dom::query_all(&self.doc, ".cart-count"), count);
    }

    /// Add to the cart, update every badge and show the toast.
    pub fn add_to_cart(&self, id: u32, qty: u32) -> Result<u32> {
        let count = self.cart.add(id, qty)?;
        self.refresh_counts(count);
        toast::show(&self.win, &self.doc, toast::ADDED_MESSAGE, self.config.toast_fade_ms, self.config.toast_remove_ms)?;
        Ok(count)
    }

    pub fn remove_from_cart(&self, id: u32) -> Result<u32> {
        let count = self.cart.remove(id)?;
        self.refresh_counts(count);
        Ok(count)
    }
}

pub fn start(config: ShopConfig) -> Result<()> {
    let site = Site::new(config)?;
    effects::install_all(&site.win, &site.doc, &site.config);
    site.refresh_counts(site.cart.count());

    let pages = [
        ("shop", install_shop(&site)),
        ("product", install_product(&site)),
        ("cart", show_cart(&site)),
    ];
    for (name, result) in pages {
        if let Err(err) = result {
            warn!(page = name, %err, "renderer failed");
        }
    }

    SITE.with(|s| s.replace(Some(site)));
    info!("site ready");
    Ok(())
}

fn install_shop(site: &Rc<Site>) -> Result<()> {
    let Some(grid) = site.doc.get_element_by_id("productGrid") else {
        return Ok(());
    };
    let label = site.doc.get_element_by_id("catName");
    let category = site.query_param("cat");
    let drawn = shop::render_shop(&grid, label.as_ref(), category.as_deref(), &site.config.currency_symbol);
    debug!(?category, drawn, "shop grid rendered");

    for btn in dom::query_all_in(&grid, ".add-btn") {
        let Some(id) = dom::data_id(&btn) else { continue };
        let site = site.clone();
        dom::listen(&btn, "click", move |_| {
            if let Err(err) = site.add_to_cart(id, 1) {
                warn!(id, %err, "add to cart failed");
            }
        })?;
    }
    Ok(())
}

fn install_product(site: &Rc<Site>) -> Result<()> {
    let Some(title) = site.doc.get_element_by_id("pTitle") else {
        return Ok(());
    };
    let id_param = site.query_param("id");
    let item = product::resolve_product(id_param.as_deref());
    let views = product::ProductViews {
        title,
        price: site.doc.get_element_by_id("pPrice"),
        description: site.doc.get_element_by_id("pDesc"),
        image: site.doc.get_element_by_id("pImage"),
    };
    product::render_product(&views, item, &site.config.currency_symbol);

    let Some(add) = site.doc.get_element_by_id("addToCart") else {
        return Ok(());
    };
    let site = site.clone();
    let id = item.id;
    dom::listen(&add, "click", move |_| {
        let qty = site
            .doc
            .get_element_by_id("qty")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map_or(1, |input| product::parse_quantity(&input.value()));
        if let Err(err) = site.add_to_cart(id, qty) {
            warn!(id, qty, %err, "add to cart failed");
        }
    })
}

/// Draw the cart page and hook its remove buttons; removing redraws.
fn show_cart(site: &Rc<Site>) -> Result<()> {
    let Some(area) = site.doc.get_element_by_id("cartItems") else {
        return Ok(());
    };
    let summary = site.doc.get_element_by_id("cartSummary");
    let entries = site.cart.load();
    cart_page::render_cart_page(&area, summary.as_ref(), &entries, &site.config);

    for btn in dom::query_all_in(&area, ".remove-btn") {
        let Some(id) = dom::data_id(&btn) else { continue };
        let site = site.clone();
        dom::listen(&btn, "click", move |_| {
            if let Err(err) = site.remove_from_cart(id).and_then(|_| show_cart(&site)) {
                warn!(id, %err, "remove from cart failed");
            }
        })?;
    }
    Ok(())
}
