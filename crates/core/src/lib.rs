//! Polymart Core - Shared types library.
//!
//! This crate provides the domain types used across the Polymart components:
//! - `storefront` - Catalog, cart store and cart persistence
//! - `cli` - Command-line front end for browsing the catalog and editing the cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices and quantities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
