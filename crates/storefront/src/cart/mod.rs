//! Cart state and the store that owns it.
//!
//! [`CartStore`] is the only way to change a cart. It loads the cart from a
//! [`crate::persistence::CartPersistence`] when opened, writes it back after
//! every mutation and then notifies subscribed [`CartObserver`]s.

mod observer;
mod state;
mod store;

pub use observer::{CartObserver, CartSnapshot};
pub use state::{CartLineItem, CartState};
pub use store::CartStore;
