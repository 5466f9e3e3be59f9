//! Catalog listing command.

use polymart_storefront::config::StorefrontConfig;
use polymart_storefront::{CatalogProvider, Result};
use polymart_storefront::views::ProductCardView;

use super::render;

/// Print every catalog product.
///
/// # Errors
///
/// Returns `StorefrontError::Catalog` if the configured catalog cannot be
/// loaded.
pub fn list(config: &StorefrontConfig) -> Result<()> {
    let catalog = config.catalog()?;
    let cards: Vec<ProductCardView> = catalog
        .products()
        .iter()
        .map(ProductCardView::from)
        .collect();
    render::product_list(&cards);
    Ok(())
}
