//! The cart store.

use tracing::{debug, instrument, warn};

use polymart_core::{Price, ProductId};

use super::observer::{CartObserver, CartSnapshot};
use super::state::{CartLineItem, CartState};
use crate::catalog::CatalogProvider;
use crate::persistence::{CartPersistence, KeyValueStore};

/// Sole owner of a cart.
///
/// Mutating operations return `true` when the cart changed. Only a change is
/// persisted and announced to observers; operations on products that are not
/// in the cart (or not in the catalog) are silent no-ops.
pub struct CartStore<C, S> {
    catalog: C,
    persistence: CartPersistence<S>,
    state: CartState,
    observers: Vec<Box<dyn CartObserver>>,
}

impl<C, S> CartStore<C, S>
where
    C: CatalogProvider,
    S: KeyValueStore,
{
    /// Open the cart saved in `persistence`, or an empty one if nothing
    /// usable is stored.
    pub fn open(catalog: C, persistence: CartPersistence<S>) -> Self {
        let state = persistence.load();
        debug!(
            lines = state.len(),
            items = state.total_item_count(),
            "Cart loaded"
        );
        Self {
            catalog,
            persistence,
            state,
            observers: Vec::new(),
        }
    }

    /// Register an observer. Observers are notified in registration order.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Put one unit of a catalog product in the cart.
    ///
    /// A product already in the cart gets one more unit; otherwise a new line
    /// is appended with the product's current name, price and image.
    #[instrument(skip(self))]
    pub fn add_product(&mut self, product_id: ProductId) -> bool {
        let changed = if self.state.contains(product_id) {
            self.state.increment(product_id)
        } else if let Some(product) = self.catalog.find_by_id(product_id) {
            self.state.push(CartLineItem::from_product(product));
            true
        } else {
            warn!("Ignoring add for product missing from catalog");
            false
        };
        self.finish(changed)
    }

    /// Add one unit to a line already in the cart.
    #[instrument(skip(self))]
    pub fn increase_quantity(&mut self, product_id: ProductId) -> bool {
        let changed = self.state.increment(product_id);
        self.finish(changed)
    }

    /// Take one unit off a line; the line is removed with its last unit.
    #[instrument(skip(self))]
    pub fn decrease_quantity(&mut self, product_id: ProductId) -> bool {
        let changed = self.state.decrement(product_id);
        self.finish(changed)
    }

    /// Drop a line regardless of its quantity.
    #[instrument(skip(self))]
    pub fn remove_product(&mut self, product_id: ProductId) -> bool {
        let changed = self.state.remove(product_id);
        self.finish(changed)
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.state.total_item_count()
    }

    /// Exact sum of line totals.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.state.total_price()
    }

    /// Line items in insertion order.
    pub fn list_items(&self) -> impl Iterator<Item = &CartLineItem> {
        self.state.iter()
    }

    /// Read-only view of the cart.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// Current totals and listing, as delivered to observers.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::of(&self.state)
    }

    /// The catalog this store adds products from.
    #[must_use]
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }

    /// The persistence adapter backing this store.
    #[must_use]
    pub const fn persistence(&self) -> &CartPersistence<S> {
        &self.persistence
    }

    /// Give up the store, returning the persistence adapter so the cart can
    /// be reopened from it.
    pub fn into_persistence(self) -> CartPersistence<S> {
        self.persistence
    }

    fn finish(&mut self, changed: bool) -> bool {
        if !changed {
            debug!("Cart unchanged");
            return false;
        }

        if let Err(e) = self.persistence.save(&self.state) {
            warn!("Failed to persist cart: {e}");
        }

        let snapshot = self.snapshot();
        debug!(
            items = snapshot.item_count,
            total = %snapshot.total,
            "Cart updated"
        );
        for observer in &self.observers {
            observer.cart_changed(&snapshot);
        }
        true
    }
}
