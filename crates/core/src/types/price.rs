//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are kept as [`Decimal`] so totals stay exact to the cent no matter
//! how many additions feed into them. The store has a single currency, so no
//! currency code travels with the amount.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::quantity::Quantity;

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
}

/// A non-negative amount in the store currency's standard unit
/// (e.g. dollars, not cents).
///
/// Serialized as a JSON number so stored carts keep the `price (number)`
/// layout. The number is written and read as decimal text, never through
/// `f64`, so every representable amount round-trips exactly.
///
/// ```
/// use polymart_core::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::new(3550, 2)).unwrap();
/// assert_eq!(price.to_string(), "$35.50");
/// assert!(Price::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: Quantity) -> Self {
        Self(self.0.saturating_mul(Decimal::from(quantity.get())))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "${rounded:.2}")
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::arbitrary_precision::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::arbitrary_precision::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn price(cents: u32) -> Price {
        Price::from_cents(cents)
    }

    #[test]
    fn test_new_rejects_negative() {
        assert_eq!(
            Price::new(Decimal::new(-1, 2)),
            Err(PriceError::Negative(Decimal::new(-1, 2)))
        );
        assert!(Price::new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(price(9999).to_string(), "$99.99");
        assert_eq!(price(3550).to_string(), "$35.50");
        assert_eq!(price(49900).to_string(), "$499.00");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_display_rounds_half_cents_up() {
        let half_cent = |text: &str| Price::new(text.parse().unwrap()).unwrap().to_string();
        assert_eq!(half_cent("0.125"), "$0.13");
        assert_eq!(half_cent("0.135"), "$0.14");
        assert_eq!(half_cent("2.675"), "$2.68");
        assert_eq!(half_cent("0.124"), "$0.12");
    }

    #[test]
    fn test_times_quantity() {
        let two = Quantity::ONE.increment().unwrap();
        assert_eq!(price(9999).times(two), price(19998));
    }

    #[test]
    fn test_sum_is_exact() {
        // 0.10 added a thousand times drifts in binary floating point.
        let total: Price = std::iter::repeat_n(price(10), 1000).sum();
        assert_eq!(total, price(10000));
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&price(9999)).unwrap();
        assert_eq!(json, "99.99");

        let parsed: Price = serde_json::from_str("99.99").unwrap();
        assert_eq!(parsed, price(9999));

        let whole: Price = serde_json::from_str("25").unwrap();
        assert_eq!(whole, price(2500));
    }

    #[test]
    fn test_serde_keeps_full_precision() {
        for text in ["1234567890123456.78", "0.1234567890123456789", "0.10", "35.50"] {
            let amount: Decimal = text.parse().unwrap();
            let price = Price::new(amount).unwrap();

            let json = serde_json::to_string(&price).unwrap();
            assert_eq!(json, text);

            let parsed: Price = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed.amount(), amount);
            assert_eq!(parsed.amount().scale(), amount.scale());

            let via_value: Price =
                serde_json::from_value(serde_json::from_str(&json).unwrap()).unwrap();
            assert_eq!(via_value.amount(), amount);
        }
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("-5.0").is_err());
    }
}
