//! Polymart Storefront library.
//!
//! The cart side of the storefront: a read-only product catalog, the cart
//! store that owns cart state, and the persistence adapter that carries the
//! cart across page loads.
//!
//! # Architecture
//!
//! - [`catalog`] - Catalog providers (static demo list or JSON file)
//! - [`cart`] - Cart state, the cart store and its observers
//! - [`persistence`] - Key-value storage backends and the cart codec
//! - [`events`] - UI events dispatched onto the cart store
//! - [`views`] - Display models for the presentation layer
//!
//! Nothing here renders markup. The presentation layer subscribes a
//! [`cart::CartObserver`] and redraws from the [`cart::CartSnapshot`] it is
//! handed after every mutation.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod persistence;
pub mod views;

pub use cart::{CartLineItem, CartObserver, CartSnapshot, CartState, CartStore};
pub use catalog::{CatalogProvider, StaticCatalog};
pub use error::{Result, StorefrontError};
pub use events::{CartEvent, CheckoutError, LineAction};
pub use persistence::{CartPersistence, FileStore, KeyValueStore, MemoryStore};
