//! Decimal-backed money and rating values.
//!
//! Both are stored as `NUMERIC` columns and serialized as JSON strings
//! (`"29.99"`), which keeps exact decimal values on the wire.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The catalog price of a clothing item, in the store's single currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(feature = "postgres", sqlx(transparent))]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Build a price from an integer number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// An average customer rating on a 0.0 - 5.0 scale with one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(feature = "postgres", sqlx(transparent))]
#[serde(transparent)]
pub struct Rating(Decimal);

impl Rating {
    /// Build a rating from tenths of a star (`45` is 4.5 stars).
    #[must_use]
    pub fn from_tenths(tenths: i64) -> Self {
        Self(Decimal::new(tenths, 1))
    }

    /// The rating value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Rating {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}
