//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("invalid price {input:?}: {reason}")]
    Invalid {
        /// The rejected input.
        input: String,
        /// Why the decimal parser rejected it.
        reason: String,
    },
}

/// A store price in dollars.
///
/// Prices are expected to be non-negative, but this is not enforced: the
/// admin dashboard stores whatever amount the merchant enters. Arithmetic
/// saturates at the bounds of [`Decimal`] instead of panicking.
///
/// ```
/// use berrima_core::Price;
///
/// let price = Price::parse("45").unwrap();
/// assert_eq!(price.to_string(), "$45.00");
/// assert_eq!(price.times(3), Price::from_whole(135));
/// assert!(Price::parse("forty").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of dollars.
    #[must_use]
    pub fn from_whole(dollars: i64) -> Self {
        Self(Decimal::from(dollars))
    }

    /// Parse a price from user input such as `"120"` or `"19.99"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or not a decimal number.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }

        Decimal::from_str(trimmed)
            .map(Self)
            .map_err(|e| PriceError::Invalid {
                input: trimmed.to_string(),
                reason: e.to_string(),
            })
    }

    /// Get the decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The price of `quantity` units.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        self.scaled(Decimal::from(quantity))
    }

    /// This price multiplied by an arbitrary decimal factor.
    #[must_use]
    pub fn scaled(self, factor: Decimal) -> Self {
        Self(self.0.saturating_mul(factor))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_decimals() {
        assert_eq!(
            Price::parse("19.99").expect("parse").amount(),
            Decimal::new(1999, 2)
        );
        assert_eq!(Price::parse("  85 ").expect("parse"), Price::from_whole(85));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Price::parse(""), Err(PriceError::Empty));
        assert_eq!(Price::parse("   "), Err(PriceError::Empty));
        assert!(matches!(
            Price::parse("abc"),
            Err(PriceError::Invalid { .. })
        ));
    }

    #[test]
    fn test_negative_prices_are_accepted() {
        let price = Price::parse("-5").expect("parse");
        assert!(price < Price::ZERO);
    }

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(Price::from_whole(120).to_string(), "$120.00");
        assert_eq!(Price::new(Decimal::new(45_5, 1)).to_string(), "$45.50");
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::from_whole(240), Price::from_whole(45)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_whole(285));

        let empty: Price = core::iter::empty().sum();
        assert_eq!(empty, Price::ZERO);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Price::new(Decimal::MAX);
        assert_eq!(max + Price::from_whole(1), max);
        assert_eq!(max.times(u32::MAX), max);
        assert_eq!(
            Price::new(Decimal::MIN).times(2),
            Price::new(Decimal::MIN)
        );

        let total: Price = [max, max, Price::from_whole(-5)].into_iter().sum();
        assert_eq!(total, Price::new(Decimal::MAX - Decimal::from(5)));
    }

    #[test]
    fn test_serde_roundtrip_keeps_precision() {
        let price = Price::new(Decimal::new(1999, 2));
        let json = serde_json::to_string(&price).expect("serialize");
        assert_eq!(json, "\"19.99\"");
        let back: Price = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, price);
    }
}
