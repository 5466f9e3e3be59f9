//! Cart persistence.
//!
//! [`CartPersistence`] ties the [`codec`] to a [`KeyValueStore`] slot. Loading
//! is fail-open: an absent, unreadable or malformed slot yields an empty
//! cart and never an error.

pub mod codec;
mod storage;

use tracing::{debug, warn};

pub use codec::CodecError;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, is_valid_key};

use crate::cart::CartState;
use crate::error::StorefrontError;

/// Storage key used when none is configured.
pub const DEFAULT_CART_KEY: &str = "polymartCart";

/// Saves and restores a cart under a fixed key.
#[derive(Debug, Clone)]
pub struct CartPersistence<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CartPersistence<S> {
    /// Persist under [`DEFAULT_CART_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_CART_KEY)
    }

    /// Persist under `key`.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying storage backend.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Encode `state` and write it to the slot.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError` if encoding or the storage write fails.
    pub fn save(&mut self, state: &CartState) -> Result<(), StorefrontError> {
        let encoded = codec::encode(state)?;
        self.store.set(&self.key, &encoded)?;
        debug!(key = %self.key, lines = state.len(), "Cart saved");
        Ok(())
    }

    /// Read the slot back, falling back to an empty cart.
    #[must_use]
    pub fn load(&self) -> CartState {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No saved cart");
                return CartState::new();
            }
            Err(e) => {
                warn!(key = %self.key, "Failed to read saved cart: {e}");
                return CartState::new();
            }
        };

        codec::decode(&raw).unwrap_or_else(|e| {
            warn!(key = %self.key, "Discarding unreadable saved cart: {e}");
            CartState::new()
        })
    }

    /// Empty the slot.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError` if the storage write fails.
    pub fn clear(&mut self) -> Result<(), StorefrontError> {
        self.store.remove(&self.key)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use polymart_core::{Price, ProductId};

    use super::*;
    use crate::cart::CartLineItem;
    use crate::catalog::{CatalogProvider, StaticCatalog};

    fn sample_state() -> CartState {
        let catalog = StaticCatalog::demo();
        CartState::from_items(
            [1, 4]
                .into_iter()
                .filter_map(|n| catalog.find_by_id(ProductId::new(n)))
                .map(CartLineItem::from_product),
        )
    }

    #[test]
    fn test_save_then_load() {
        let mut persistence = CartPersistence::new(MemoryStore::new());
        let state = sample_state();

        persistence.save(&state).unwrap();
        assert_eq!(persistence.load(), state);
        assert_eq!(persistence.load().total_price(), Price::from_cents(59899));
    }

    #[test]
    fn test_load_absent_is_empty() {
        let persistence = CartPersistence::new(MemoryStore::new());
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_is_empty() {
        let mut store = MemoryStore::new();
        store.set(DEFAULT_CART_KEY, "[{\"id\":").unwrap();
        let persistence = CartPersistence::new(store);
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn test_load_unreadable_storage_is_empty() {
        // Keys with a path separator cannot be read from a FileStore.
        let dir = tempfile::tempdir().unwrap();
        let persistence = CartPersistence::with_key(FileStore::new(dir.path()), "a/b");
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn test_custom_key_and_clear() {
        let mut persistence = CartPersistence::with_key(MemoryStore::new(), "otherCart");
        persistence.save(&sample_state()).unwrap();
        assert!(persistence.store().get("otherCart").unwrap().is_some());
        assert!(persistence.store().get(DEFAULT_CART_KEY).unwrap().is_none());

        persistence.clear().unwrap();
        assert!(persistence.load().is_empty());
    }
}
