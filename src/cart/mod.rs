//! Shopping cart persisted as one JSON array under a single storage key.
//!
//! `CartStore` is the only code that reads or writes that key. Every mutation
//! is load → modify → save of the whole array; the last write wins.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, ShopError};
use crate::storage::KeyValueStore;

pub mod totals;

pub use totals::{CartLine, CartTotals};

/// One product line. `id` is not checked against the catalog on write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: u32,
    pub qty: u32,
}

pub struct CartStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CartStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current entries. Missing or unparsable data reads as an empty cart;
    /// lines with a zero quantity are dropped.
    pub fn load(&self) -> Vec<CartEntry> {
        let Some(raw) = self.store.get(&self.key) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<CartEntry>>(&raw) {
            Ok(mut entries) => {
                entries.retain(|e| e.qty > 0);
                entries
            }
            Err(err) => {
                warn!(key = %self.key, %err, "discarding malformed cart");
                Vec::new()
            }
        }
    }

    /// Replace the persisted cart with `entries`.
    pub fn save(&self, entries: &[CartEntry]) -> Result<()> {
        let json = serde_json::to_string(entries).map_err(|e| ShopError::Storage(e.to_string()))?;
        self.store.set(&self.key, &json)
    }

    /// Add `qty` of product `id` (at least one), merging with an existing line.
    /// Returns the new item count for the badge refresh.
    pub fn add(&self, id: u32, qty: u32) -> Result<u32> {
        let qty = qty.max(1);
        let mut entries = self.load();
        match entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => entry.qty = entry.qty.saturating_add(qty),
            None => entries.push(CartEntry { id, qty }),
        }
        self.save(&entries)?;
        debug!(id, qty, "added to cart");
        Ok(count_of(&entries))
    }

    /// Drop the line for `id`, if any. Returns the new item count.
    pub fn remove(&self, id: u32) -> Result<u32> {
        let mut entries = self.load();
        entries.retain(|e| e.id != id);
        self.save(&entries)?;
        debug!(id, "removed from cart");
        Ok(count_of(&entries))
    }

    /// Total quantity across all lines.
    pub fn count(&self) -> u32 {
        count_of(&self.load())
    }
}

fn count_of(entries: &[CartEntry]) -> u32 {
    entries.iter().fold(0u32, |sum, e| sum.saturating_add(e.qty))
}
