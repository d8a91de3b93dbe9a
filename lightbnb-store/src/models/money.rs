//! Cents-based money
//!
//! Prices live in the database as integer cents. Search filters arrive in
//! whole dollars and go through [`Cents::from_dollars`] before being bound.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

const CENTS_PER_DOLLAR: i32 = 100;

/// Amount of money in hundredths of the display currency unit
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct Cents(i32);

impl Cents {
    pub const fn new(cents: i32) -> Self {
        Self(cents)
    }

    /// Convert whole dollars to cents, rejecting values that overflow the
    /// `INTEGER` column.
    pub fn from_dollars(field: &'static str, dollars: i32) -> Result<Self, ValidationError> {
        dollars
            .checked_mul(CENTS_PER_DOLLAR)
            .map(Self)
            .ok_or(ValidationError::OutOfRange {
                field,
                value: i64::from(dollars),
            })
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(
            f,
            "{}${}.{:02}",
            sign,
            abs / CENTS_PER_DOLLAR as u32,
            abs % CENTS_PER_DOLLAR as u32
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dollars_to_cents() {
        assert_eq!(Cents::from_dollars("price", 50).unwrap().get(), 5000);
        assert_eq!(Cents::from_dollars("price", 150).unwrap().get(), 15000);
        assert_eq!(Cents::from_dollars("price", 0).unwrap().get(), 0);
    }

    #[test]
    fn overflow_is_rejected() {
        let err = Cents::from_dollars("maximum_price_per_night", i32::MAX).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                field: "maximum_price_per_night",
                value: i64::from(i32::MAX),
            }
        );
    }

    #[test]
    fn display() {
        assert_eq!(Cents::new(9_350).to_string(), "$93.50");
        assert_eq!(Cents::new(5).to_string(), "$0.05");
        assert_eq!(Cents::new(-1_999).to_string(), "-$19.99");
    }
}
