//! Mobile navigation toggle.
//!
//! The open/closed state lives in [`NavToggle`], shared with the listeners
//! through `Rc<RefCell<_>>`. Every transition rewrites the nav class, the
//! button glyph, `aria-expanded` and the body scroll lock together.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent, Node, Window};

use crate::dom;
use crate::error::Result;
use crate::view::View;

pub const OPEN_CLASS: &str = "show";
pub const BODY_LOCK_CLASS: &str = "nav-open-no-scroll";
pub const ICON_OPEN: &str = "✖";
pub const ICON_CLOSED: &str = "☰";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavState {
    Open,
    Closed,
}

pub struct NavToggle<V> {
    button: V,
    nav: V,
    body: Option<V>,
    state: NavState,
    breakpoint: f64,
}

impl<V: View> NavToggle<V> {
    /// Starts closed. A button with no glyph gets the closed icon.
    pub fn new(button: V, nav: V, body: Option<V>, breakpoint: f64) -> Self {
        if button.text().trim().is_empty() {
            button.set_text(ICON_CLOSED);
        }
        button.set_attribute("aria-expanded", "false");
        Self { button, nav, body, state: NavState::Closed, breakpoint }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == NavState::Open
    }

    pub fn open(&mut self) {
        self.apply(NavState::Open);
    }

    pub fn close(&mut self) {
        self.apply(NavState::Closed);
    }

    pub fn toggle(&mut self) {
        match self.state {
            NavState::Open => self.close(),
            NavState::Closed => self.open(),
        }
    }

    pub fn on_key(&mut self, key: &str) {
        if key == "Escape" && self.is_open() {
            self.close();
        }
    }

    /// Document click. Clicks on the button or inside the nav are ignored.
    pub fn on_document_click(&mut self, on_button: bool, inside_nav: bool) {
        if self.is_open() && !on_button && !inside_nav {
            self.close();
        }
    }

    /// A nav link was followed; only collapses on narrow viewports.
    pub fn on_link_click(&mut self, viewport_width: f64) {
        if viewport_width <= self.breakpoint {
            self.close();
        }
    }

    fn apply(&mut self, state: NavState) {
        let open = state == NavState::Open;
        self.nav.set_class(OPEN_CLASS, open);
        self.button.set_text(if open { ICON_OPEN } else { ICON_CLOSED });
        self.button.set_attribute("aria-expanded", if open { "true" } else { "false" });
        if let Some(body) = &self.body {
            body.set_class(BODY_LOCK_CLASS, open);
        }
        self.state = state;
    }
}

/// Wire `#navToggle` and `.nav` if both are on the page.
pub fn install(win: &Window, doc: &Document, breakpoint: f64) -> Result<()> {
    let (Some(button), Some(nav)) = (doc.get_element_by_id("navToggle"), dom::query(doc, ".nav")) else {
        return Ok(());
    };
    let body: Option<Element> = doc.body().map(Into::into);
    let links = dom::query_all_in(&nav, "a");
    let toggle = Rc::new(RefCell::new(NavToggle::new(button.clone(), nav.clone(), body, breakpoint)));

    {
        let toggle = toggle.clone();
        dom::listen(&button, "click", move |evt| {
            evt.stop_propagation();
            toggle.borrow_mut().toggle();
        })?;
    }

    {
        let toggle = toggle.clone();
        let button = button.clone();
        let nav = nav.clone();
        dom::listen(doc, "click", move |evt| {
            let target = evt.target().and_then(|t| t.dyn_into::<Node>().ok());
            let on_button = target.as_ref().is_some_and(|t| button.is_same_node(Some(t)));
            let inside_nav = nav.contains(target.as_ref());
            toggle.borrow_mut().on_document_click(on_button, inside_nav);
        })?;
    }

    {
        let toggle = toggle.clone();
        dom::listen(doc, "keydown", move |evt| {
            if let Some(key) = evt.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
                toggle.borrow_mut().on_key(&key);
            }
        })?;
    }

    for link in links {
        let toggle = toggle.clone();
        let win = win.clone();
        dom::listen(&link, "click", move |_| {
            toggle.borrow_mut().on_link_click(dom::inner_width(&win));
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::RecordingView;

    fn toggle() -> NavToggle<RecordingView> {
        NavToggle::new(RecordingView::new(), RecordingView::new(), Some(RecordingView::new()), 768.0)
    }

    #[test]
    fn starts_closed_with_icon() {
        let t = toggle();
        assert_eq!(t.state(), NavState::Closed);
        assert_eq!(t.button.text(), ICON_CLOSED);
        assert_eq!(t.button.attribute("aria-expanded").as_deref(), Some("false"));
    }

    #[test]
    fn existing_glyph_is_kept() {
        let t = NavToggle::new(RecordingView::with_text("Menu"), RecordingView::new(), None, 768.0);
        assert_eq!(t.button.text(), "Menu");
    }

    #[test]
    fn toggle_flips_everything_together() {
        let mut t = toggle();
        t.toggle();
        assert!(t.is_open());
        assert!(t.nav.has_class(OPEN_CLASS));
        assert!(t.body.as_ref().unwrap().has_class(BODY_LOCK_CLASS));
        assert_eq!(t.button.text(), ICON_OPEN);
        assert_eq!(t.button.attribute("aria-expanded").as_deref(), Some("true"));

        t.toggle();
        assert!(!t.is_open());
        assert!(!t.nav.has_class(OPEN_CLASS));
        assert!(!t.body.as_ref().unwrap().has_class(BODY_LOCK_CLASS));
        assert_eq!(t.button.text(), ICON_CLOSED);
    }

    #[test]
    fn escape_closes_other_keys_do_not() {
        let mut t = toggle();
        t.open();
        t.on_key("Enter");
        assert!(t.is_open());
        t.on_key("Escape");
        assert!(!t.is_open());
    }

    #[test]
    fn outside_click_closes_inside_click_does_not() {
        let mut t = toggle();
        t.open();
        t.on_document_click(false, true);
        assert!(t.is_open());
        t.on_document_click(true, false);
        assert!(t.is_open());
        t.on_document_click(false, false);
        assert!(!t.is_open());
    }

    #[test]
    fn link_click_closes_only_on_mobile() {
        let mut t = toggle();
        t.open();
        t.on_link_click(1024.0);
        assert!(t.is_open());
        t.on_link_click(768.0);
        assert!(!t.is_open());
    }
}
