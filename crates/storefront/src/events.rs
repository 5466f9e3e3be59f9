//! UI events and their dispatch onto the cart store.
//!
//! The presentation layer raises three kinds of events: an add-to-cart click
//! on a product card, a click on one of a cart line's controls, and the
//! checkout button.

use std::str::FromStr;

use thiserror::Error;
use tracing::{info, instrument};

use polymart_core::ProductId;

use crate::cart::CartStore;
use crate::catalog::CatalogProvider;
use crate::persistence::KeyValueStore;

/// Control on a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineAction {
    Increase,
    Decrease,
    Remove,
}

impl LineAction {
    /// The action name as carried by the UI control.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::Remove => "remove",
        }
    }
}

/// Unrecognized line control name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown cart line action: {0:?}")]
pub struct ParseLineActionError(String);

impl FromStr for LineAction {
    type Err = ParseLineActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "increase" => Ok(Self::Increase),
            "decrease" => Ok(Self::Decrease),
            "remove" => Ok(Self::Remove),
            other => Err(ParseLineActionError(other.to_owned())),
        }
    }
}

/// A user interaction the cart reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEvent {
    /// "Add to cart" on a product card.
    AddToCart(ProductId),
    /// One of the controls on a cart line.
    LineControl {
        product_id: ProductId,
        action: LineAction,
    },
    /// The checkout button.
    Checkout,
}

/// Checkout cannot be completed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Checkout is not implemented: it requires a backend")]
    BackendRequired,
}

impl<C, S> CartStore<C, S>
where
    C: CatalogProvider,
    S: KeyValueStore,
{
    /// Route a UI event to the matching store operation.
    ///
    /// Returns whether the cart changed.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError` for [`CartEvent::Checkout`].
    pub fn dispatch(&mut self, event: CartEvent) -> Result<bool, CheckoutError> {
        match event {
            CartEvent::AddToCart(product_id) => Ok(self.add_product(product_id)),
            CartEvent::LineControl { product_id, action } => Ok(match action {
                LineAction::Increase => self.increase_quantity(product_id),
                LineAction::Decrease => self.decrease_quantity(product_id),
                LineAction::Remove => self.remove_product(product_id),
            }),
            CartEvent::Checkout => self.checkout().map(|()| false),
        }
    }

    /// Hand the cart over to checkout.
    ///
    /// There is no order backend, so this always refuses. The cart is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Always returns `CheckoutError::BackendRequired`.
    #[instrument(skip(self))]
    pub fn checkout(&self) -> Result<(), CheckoutError> {
        info!(
            items = self.total_item_count(),
            total = %self.total_price(),
            "Checkout requested"
        );
        Err(CheckoutError::BackendRequired)
    }
}
