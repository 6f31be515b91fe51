//! # Money Module
//!
//! Provides the `Money` type used to settle a computed price to whole cents.
//!
//! ## Why Cents?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    1299.99 × (1 − 0.20) = 1039.992000000000…                           │
//! │                                                                         │
//! │  A shopper can only ever pay whole cents, so the discounted price is   │
//! │  settled once, here:                                                    │
//! │    1039.992 → 103999 cents → $1039.99                                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ebike_core::money::Money;
//!
//! let price = Money::try_from_amount(1039.992).unwrap();
//! assert_eq!(price.cents(), 103999);
//! assert_eq!(price.to_string(), "$1039.99");
//!
//! // Beyond what i64 cents can hold
//! assert!(Money::try_from_amount(1e17).is_none());
//! ```

use serde::Serialize;
use std::fmt;
use ts_rs::TS;

/// A monetary value in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a currency amount to the nearest cent.
    ///
    /// Exact halves go to the even cent. Returns `None` when the amount is
    /// not finite or the cents do not fit in an `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use ebike_core::money::Money;
    ///
    /// assert_eq!(Money::try_from_amount(1800.0).unwrap().cents(), 180000);
    /// assert_eq!(Money::try_from_amount(0.125).unwrap().cents(), 12);
    /// assert_eq!(Money::try_from_amount(0.375).unwrap().cents(), 38);
    /// ```
    pub fn try_from_amount(amount: f64) -> Option<Self> {
        let cents = (amount * 100.0).round_ties_even();
        // i64::MAX as f64 rounds up to 2^63, hence the strict bound
        if !cents.is_finite() || cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return None;
        }
        Some(Money::from_cents(cents as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. Localized formatting belongs to whatever
/// renders the catalog.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_try_from_amount_rounds_to_cent() {
        assert_eq!(Money::try_from_amount(1039.992).unwrap().cents(), 103999);
        assert_eq!(Money::try_from_amount(2250.0).unwrap().cents(), 225000);
        assert_eq!(Money::try_from_amount(0.0).unwrap().cents(), 0);
        assert_eq!(Money::try_from_amount(19.999).unwrap().cents(), 2000);
    }

    #[test]
    fn test_try_from_amount_ties_to_even() {
        assert_eq!(Money::try_from_amount(0.125).unwrap().cents(), 12);
        assert_eq!(Money::try_from_amount(0.375).unwrap().cents(), 38);
        assert_eq!(Money::try_from_amount(0.625).unwrap().cents(), 62);
    }

    #[test]
    fn test_try_from_amount_out_of_range() {
        assert!(Money::try_from_amount(1e17).is_none());
        assert!(Money::try_from_amount(1e300).is_none());
        assert!(Money::try_from_amount(f64::INFINITY).is_none());
        assert!(Money::try_from_amount(f64::NAN).is_none());
        assert!(Money::try_from_amount(9.0e16).is_some());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }
}
