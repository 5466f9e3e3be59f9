//! Product catalog providers.
//!
//! The cart reads products through [`CatalogProvider`] so the catalog data
//! source can be swapped without touching the store. [`StaticCatalog`] holds
//! a fixed list, either the built-in demo products or one loaded from JSON.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use polymart_core::{Price, Product, ProductId};

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate product id {0} in catalog")]
    DuplicateId(ProductId),
}

/// Read-only source of available products.
pub trait CatalogProvider {
    /// All products, in display order.
    fn products(&self) -> &[Product];

    /// The product with `id`, if the catalog has one.
    fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|product| product.id == id)
    }
}

/// A fixed product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

/// `(id, name, price in cents)` for the demo storefront.
const DEMO_PRODUCTS: &[(i32, &str, u32)] = &[
    (1, "Wireless Headphones", 9999),
    (2, "Smartwatch Pro", 19999),
    (3, "Portable Power Bank", 3550),
    (4, "4K Monitor", 49900),
    (5, "Mechanical Keyboard", 12000),
    (6, "RGB Mousepad", 2500),
];

impl StaticCatalog {
    /// Build a catalog from `products`, kept in the given order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        if let Some(dup) = products.iter().find(|product| !seen.insert(product.id)) {
            return Err(CatalogError::DuplicateId(dup.id));
        }
        Ok(Self { products })
    }

    /// The six products of the demo storefront.
    #[must_use]
    pub fn demo() -> Self {
        let products = DEMO_PRODUCTS
            .iter()
            .map(|&(id, name, cents)| {
                Product::new(
                    ProductId::new(id),
                    name,
                    Price::from_cents(cents),
                    format!("https://picsum.photos/300/200?random={id}"),
                )
            })
            .collect();
        Self { products }
    }

    /// Parse a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the JSON is malformed, a price is negative,
    /// or two products share an id.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Load a JSON catalog file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogProvider for StaticCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }
}
