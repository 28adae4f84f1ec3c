//! Key-value storage seam.
//!
//! The cart only ever talks to a [`KeyValueStore`]; the browser build hands it
//! [`WebStorage`] (`window.localStorage`) and tests hand it [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{Result, ShopError};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// `window.localStorage`. Looked up on every call so a page that revokes
/// storage mid-session just reads as empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebStorage;

impl WebStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// Whether the browser exposes a usable `localStorage` at all.
    pub fn available() -> bool {
        Self::storage().is_some()
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let storage = Self::storage().ok_or_else(|| ShopError::Storage("localStorage unavailable".into()))?;
        storage.set_item(key, value).map_err(ShopError::storage)
    }
}

/// In-process store. Used by tests and as the fallback when `localStorage`
/// throws (private browsing), in which case the cart lasts one page view.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites() {
        let store = MemoryStore::with("k", "a");
        assert_eq!(store.get("k").as_deref(), Some("a"));
        store.set("k", "b").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("b"));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn borrowed_store_delegates() {
        let store = MemoryStore::new();
        let by_ref = &store;
        by_ref.set("x", "1").unwrap();
        assert_eq!(store.get("x").as_deref(), Some("1"));
    }
}
