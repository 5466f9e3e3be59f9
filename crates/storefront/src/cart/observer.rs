//! Change notification for the presentation layer.

use polymart_core::Price;

use super::state::{CartLineItem, CartState};

/// The cart as it stands right after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    /// Sum of quantities (the count badge).
    pub item_count: u64,
    /// Sum of line totals.
    pub total: Price,
    /// Full line listing in insertion order.
    pub items: CartState,
}

impl CartSnapshot {
    /// Capture `state`.
    #[must_use]
    pub fn of(state: &CartState) -> Self {
        Self {
            item_count: state.total_item_count(),
            total: state.total_price(),
            items: state.clone(),
        }
    }

    /// Returns true if the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Line items in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLineItem> {
        self.items.iter()
    }
}

/// Receives a [`CartSnapshot`] after every cart mutation.
pub trait CartObserver {
    fn cart_changed(&self, snapshot: &CartSnapshot);
}

impl<F> CartObserver for F
where
    F: Fn(&CartSnapshot),
{
    fn cart_changed(&self, snapshot: &CartSnapshot) {
        self(snapshot);
    }
}
