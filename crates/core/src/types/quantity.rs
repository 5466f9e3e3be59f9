//! Line item quantity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    /// A line item cannot hold zero units.
    #[error("quantity must be at least 1")]
    Zero,
}

/// Number of units of a product held by one cart line item.
///
/// Always at least 1: a line whose quantity would drop to zero is removed
/// from the cart instead of being kept around empty.
///
/// ```
/// use polymart_core::Quantity;
///
/// let two = Quantity::ONE.increment().unwrap();
/// assert_eq!(two.get(), 2);
/// assert_eq!(two.decrement(), Some(Quantity::ONE));
/// assert_eq!(Quantity::ONE.decrement(), None);
/// assert!(Quantity::try_from(0).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// A single unit.
    pub const ONE: Self = Self(1);

    /// Get the number of units.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// One more unit, or `None` if the count would overflow.
    #[must_use]
    pub const fn increment(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// One fewer unit, or `None` if that would leave zero.
    #[must_use]
    pub const fn decrement(self) -> Option<Self> {
        if self.0 > 1 { Some(Self(self.0 - 1)) } else { None }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(QuantityError::Zero);
        }
        Ok(Self(value))
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rejected() {
        assert_eq!(Quantity::try_from(0), Err(QuantityError::Zero));
        assert_eq!(Quantity::try_from(3).unwrap().get(), 3);
    }

    #[test]
    fn test_increment_overflow() {
        let max = Quantity::try_from(u32::MAX).unwrap();
        assert_eq!(max.increment(), None);
    }

    #[test]
    fn test_decrement_never_reaches_zero() {
        let three = Quantity::try_from(3).unwrap();
        let two = three.decrement().unwrap();
        let one = two.decrement().unwrap();
        assert_eq!(one, Quantity::ONE);
        assert_eq!(one.decrement(), None);
    }

    #[test]
    fn test_serde_uses_plain_integer() {
        let q = Quantity::try_from(2).unwrap();
        assert_eq!(serde_json::to_string(&q).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Quantity>("2").unwrap(), q);
        assert!(serde_json::from_str::<Quantity>("0").is_err());
        assert!(serde_json::from_str::<Quantity>("-1").is_err());
    }
}
