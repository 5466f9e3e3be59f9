//! Cart commands.
//!
//! The cart panel is redrawn by an observer subscribed to the store, the
//! same way a page redraws its cart sidebar after every change.

use tracing::info;

use polymart_storefront::config::StorefrontConfig;
use polymart_storefront::views::CartView;
use polymart_storefront::{CartEvent, CartSnapshot, CartStore, Result};

use super::render;

/// Show the saved cart.
///
/// # Errors
///
/// Returns `StorefrontError::Catalog` if the configured catalog cannot be
/// loaded.
pub fn show(config: &StorefrontConfig) -> Result<()> {
    let store = CartStore::open(config.catalog()?, config.persistence());
    render::cart_panel(&CartView::from(&store.snapshot()));
    Ok(())
}

/// Apply one user event to the saved cart.
///
/// # Errors
///
/// Returns `StorefrontError::Catalog` if the catalog cannot be loaded, or
/// `StorefrontError::Checkout` if the event is a checkout request.
pub fn apply(config: &StorefrontConfig, event: CartEvent) -> Result<()> {
    let mut store = CartStore::open(config.catalog()?, config.persistence());
    store.subscribe(|snapshot: &CartSnapshot| {
        render::cart_panel(&CartView::from(snapshot));
    });

    let changed = store.dispatch(event)?;
    if !changed {
        info!(?event, "Cart unchanged");
        render::cart_panel(&CartView::from(&store.snapshot()));
    }
    Ok(())
}
