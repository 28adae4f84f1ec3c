//! Small DOM helpers shared by the page wiring.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, NodeList, Window};

use crate::error::{Result, ShopError};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(ShopError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(ShopError::NoDocument)
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// `document.querySelectorAll`, with a bad selector reading as no matches.
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    doc.query_selector_all(selector).map(elements).unwrap_or_default()
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector).map(elements).unwrap_or_default()
}

pub fn query(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok().flatten()
}

/// `data-id` as a product id.
pub fn data_id(el: &Element) -> Option<u32> {
    el.get_attribute("data-id")?.trim().parse().ok()
}

pub fn inner_width(win: &Window) -> f64 {
    win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

pub fn inner_height(win: &Window) -> f64 {
    win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ListenOptions {
    pub passive: bool,
    pub once: bool,
}

/// Attach `handler` for the rest of the page's life.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<()> {
    listen_with(target, event, ListenOptions::default(), handler)
}

pub fn listen_with(target: &EventTarget, event: &str, opts: ListenOptions, handler: impl FnMut(Event) + 'static) -> Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(opts.passive);
    options.set_once(opts.once);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(event, closure.as_ref().unchecked_ref(), &options)
        .map_err(ShopError::dom)?;
    closure.forget();
    Ok(())
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(win: &Window, ms: i32, f: impl FnOnce() + 'static) -> Result<()> {
    let cb = Closure::once_into_js(f);
    win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
        .map(|_| ())
        .map_err(ShopError::dom)
}
