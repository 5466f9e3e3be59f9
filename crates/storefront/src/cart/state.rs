//! Cart line items and cart state.

use im::Vector;
use serde::{Deserialize, Serialize};

use polymart_core::{Price, Product, ProductId, Quantity};

/// One product entry in the cart.
///
/// `name`, `price` and `image` are copied from the catalog when the product
/// is first added and are never refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub quantity: Quantity,
}

impl CartLineItem {
    /// Snapshot `product` into a new line holding a single unit.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: Quantity::ONE,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Ordered set of cart line items, unique by product id.
///
/// Backed by a persistent vector: cloning is cheap and clones share
/// structure, so a snapshot handed out to observers is never affected by
/// later mutations of the live cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    items: Vector<CartLineItem>,
}

impl CartState {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from decoded line items.
    ///
    /// Lines sharing a product id are merged: the first occurrence keeps its
    /// position and snapshot fields, quantities are summed.
    pub fn from_items(items: impl IntoIterator<Item = CartLineItem>) -> Self {
        let mut state = Self::new();
        for item in items {
            match state.position(item.id) {
                Some(idx) => {
                    if let Some(existing) = state.items.get_mut(idx) {
                        let merged = existing.quantity.get().saturating_add(item.quantity.get());
                        // merged >= 2, so the conversion cannot fail
                        if let Ok(quantity) = Quantity::try_from(merged) {
                            existing.quantity = quantity;
                        }
                    }
                }
                None => state.items.push_back(item),
            }
        }
        state
    }

    /// Line items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLineItem> {
        self.items.iter()
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line item for `id`, if present.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns true if a line item for `id` is present.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Sum of quantities across all line items.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Sum of `price x quantity` across all line items.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Append a new line. The caller guarantees `item.id` is not present.
    pub(crate) fn push(&mut self, item: CartLineItem) {
        debug_assert!(!self.contains(item.id));
        self.items.push_back(item);
    }

    /// Add one unit to the line for `id`. Returns false if there is no such
    /// line or the quantity is already at its maximum.
    pub(crate) fn increment(&mut self, id: ProductId) -> bool {
        let Some(item) = self.position(id).and_then(|idx| self.items.get_mut(idx)) else {
            return false;
        };
        match item.quantity.increment() {
            Some(quantity) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Take one unit off the line for `id`, dropping the line when its last
    /// unit goes. Returns false if there is no such line.
    pub(crate) fn decrement(&mut self, id: ProductId) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        match self.items.get(idx).and_then(|item| item.quantity.decrement()) {
            Some(quantity) => {
                if let Some(item) = self.items.get_mut(idx) {
                    item.quantity = quantity;
                }
            }
            None => {
                self.items.remove(idx);
            }
        }
        true
    }

    /// Drop the line for `id`. Returns false if there is no such line.
    pub(crate) fn remove(&mut self, id: ProductId) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a CartState {
    type Item = &'a CartLineItem;
    type IntoIter = im::vector::Iter<'a, CartLineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
