//! Unified error handling.
//!
//! Each concern has its own error enum next to the code that raises it;
//! [`StorefrontError`] wraps them for callers that deal with several.
//! Cart operations themselves never fail: unknown products are ignored,
//! storage trouble is logged and the in-memory cart stays authoritative.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::events::CheckoutError;
use crate::persistence::{CodecError, StorageError};

/// Library-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Reading or writing the storage medium failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Cart data could not be encoded or decoded.
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// The catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Checkout is unavailable.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// Configuration is invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
