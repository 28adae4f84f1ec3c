//! The narrow slice of the DOM the renderers and effects write through.
//!
//! Browser code passes `web_sys::Element`; tests pass [`RecordingView`].

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

pub trait View {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    /// Replace the element's children with `html`. Callers escape.
    fn set_html(&self, html: &str);
    fn set_attribute(&self, name: &str, value: &str);
    fn set_class(&self, class: &str, on: bool);
}

impl View for web_sys::Element {
    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_html(&self, html: &str) {
        self.set_inner_html(html);
    }

    fn set_attribute(&self, name: &str, value: &str) {
        web_sys::Element::set_attribute(self, name, value).ok();
    }

    fn set_class(&self, class: &str, on: bool) {
        self.class_list().toggle_with_force(class, on).ok();
    }
}

impl<V: View + ?Sized> View for &V {
    fn text(&self) -> String {
        (**self).text()
    }
    fn set_text(&self, text: &str) {
        (**self).set_text(text)
    }
    fn set_html(&self, html: &str) {
        (**self).set_html(html)
    }
    fn set_attribute(&self, name: &str, value: &str) {
        (**self).set_attribute(name, value)
    }
    fn set_class(&self, class: &str, on: bool) {
        (**self).set_class(class, on)
    }
}

/// Element stand-in that remembers what was written to it.
#[derive(Debug, Default)]
pub struct RecordingView {
    text: RefCell<String>,
    html: RefCell<String>,
    attributes: RefCell<BTreeMap<String, String>>,
    classes: RefCell<BTreeSet<String>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let view = Self::new();
        view.set_text(text);
        view
    }

    pub fn html(&self) -> String {
        self.html.borrow().clone()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}

impl View for RecordingView {
    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_owned();
        self.html.borrow_mut().clear();
    }

    fn set_html(&self, html: &str) {
        *self.html.borrow_mut() = html.to_owned();
        self.text.borrow_mut().clear();
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
    }

    fn set_class(&self, class: &str, on: bool) {
        let mut classes = self.classes.borrow_mut();
        if on {
            classes.insert(class.to_owned());
        } else {
            classes.remove(class);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_html_replace_each_other() {
        let v = RecordingView::with_text("hello");
        v.set_html("<b>x</b>");
        assert_eq!(v.text(), "");
        assert_eq!(v.html(), "<b>x</b>");
        v.set_text("plain");
        assert_eq!(v.html(), "");
    }

    #[test]
    fn classes_toggle() {
        let v = RecordingView::new();
        v.set_class("show", true);
        assert!(v.has_class("show"));
        v.set_class("show", false);
        assert!(!v.has_class("show"));
    }
}
