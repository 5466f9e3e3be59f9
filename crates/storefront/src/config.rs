//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `POLYMART_DATA_DIR` - Directory holding the saved cart (default: .polymart)
//! - `POLYMART_CART_KEY` - Storage key for the cart (default: polymartCart)
//! - `POLYMART_CATALOG` - Path to a JSON product catalog (default: built-in demo catalog)
//! - `POLYMART_LOG_FORMAT` - `pretty` or `json` (default: pretty)

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::catalog::{CatalogError, StaticCatalog};
use crate::persistence::{CartPersistence, DEFAULT_CART_KEY, FileStore, is_valid_key};

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `pretty` or `json`, got {other:?}")),
        }
    }
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory for the file-backed cart storage
    pub data_dir: PathBuf,
    /// Key the cart is stored under
    pub cart_key: String,
    /// JSON catalog to load instead of the demo catalog
    pub catalog_path: Option<PathBuf>,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".polymart"),
            cart_key: DEFAULT_CART_KEY.to_string(),
            catalog_path: None,
            log_format: LogFormat::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_dir = lookup("POLYMART_DATA_DIR").map_or(defaults.data_dir, PathBuf::from);

        let cart_key = lookup("POLYMART_CART_KEY").unwrap_or(defaults.cart_key);
        if !is_valid_key(&cart_key) {
            return Err(ConfigError::InvalidEnvVar(
                "POLYMART_CART_KEY".to_string(),
                "must be non-empty and contain only letters, digits, '-' or '_'".to_string(),
            ));
        }

        let catalog_path = lookup("POLYMART_CATALOG").map(PathBuf::from);

        let log_format = lookup("POLYMART_LOG_FORMAT")
            .map(|value| value.parse::<LogFormat>())
            .transpose()
            .map_err(|e| ConfigError::InvalidEnvVar("POLYMART_LOG_FORMAT".to_string(), e))?
            .unwrap_or_default();

        Ok(Self {
            data_dir,
            cart_key,
            catalog_path,
            log_format,
        })
    }

    /// The configured catalog, or the demo catalog if none is set.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog file cannot be loaded.
    pub fn catalog(&self) -> Result<StaticCatalog, CatalogError> {
        self.catalog_path
            .as_deref()
            .map_or_else(|| Ok(StaticCatalog::demo()), StaticCatalog::from_path)
    }

    /// File-backed cart persistence under the configured key.
    #[must_use]
    pub fn persistence(&self) -> CartPersistence<FileStore> {
        CartPersistence::with_key(FileStore::new(&self.data_dir), &self.cart_key)
    }
}
