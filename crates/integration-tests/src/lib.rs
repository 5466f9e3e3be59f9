//! Integration tests for the Polymart cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p polymart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - End-to-end cart flows against a fixed catalog
//! - `cart_properties` - Invariants over arbitrary operation sequences
//! - `persistence` - Save/load across store instances and storage backends
//!
//! This library holds the shared fixtures.

use polymart_core::{Price, Product, ProductId};
use polymart_storefront::{CartPersistence, CartStore, MemoryStore, StaticCatalog};

/// Catalog with known prices: 1 at 99.99, 2 at 35.50, 3 at 0.10.
#[must_use]
pub fn fixture_catalog() -> StaticCatalog {
    let products = vec![
        Product::new(ProductId::new(1), "Wireless Headphones", Price::from_cents(9999), "img/1.png"),
        Product::new(ProductId::new(2), "Portable Power Bank", Price::from_cents(3550), "img/2.png"),
        Product::new(ProductId::new(3), "Sticker", Price::from_cents(10), "img/3.png"),
    ];
    match StaticCatalog::new(products) {
        Ok(catalog) => catalog,
        Err(e) => panic!("fixture catalog is invalid: {e}"),
    }
}

/// A fresh store over [`fixture_catalog`] with in-memory storage.
#[must_use]
pub fn memory_store() -> CartStore<StaticCatalog, MemoryStore> {
    CartStore::open(fixture_catalog(), CartPersistence::new(MemoryStore::new()))
}

/// Shorthand for a product id.
#[must_use]
pub const fn id(n: i32) -> ProductId {
    ProductId::new(n)
}
