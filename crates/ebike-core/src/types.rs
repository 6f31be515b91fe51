//! # Bounded Value Types
//!
//! Small newtypes whose constructors enforce a range, so the entity can
//! store them without re-checking.
//!
//! ```text
//! ┌─────────────────┐   ┌─────────────────┐
//! │   AssistLevel   │   │    Discount     │
//! │  ─────────────  │   │  ─────────────  │
//! │  u8 in 1..=5    │   │  f64 in [0, 1)  │
//! │  3 = reference  │   │  0.1 = 10% off  │
//! └─────────────────┘   └─────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::validation::{validate_assist_level, validate_discount_percent, ValidationResult};

// =============================================================================
// Assist Level
// =============================================================================

/// Motor assistance intensity, 1 (eco) to 5 (turbo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct AssistLevel(u8);

impl AssistLevel {
    /// Creates an assist level, rejecting anything outside `1..=5`.
    ///
    /// ## Example
    /// ```rust
    /// use ebike_core::AssistLevel;
    ///
    /// assert_eq!(AssistLevel::new(4).unwrap().get(), 4);
    /// assert!(AssistLevel::new(0).is_err());
    /// ```
    pub fn new(level: i64) -> ValidationResult<Self> {
        validate_assist_level(level).map(AssistLevel)
    }

    /// Returns the level.
    #[inline]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

// =============================================================================
// Discount
// =============================================================================

/// Fractional markdown applied to the base price.
///
/// ## Why a Fraction?
/// `0.25` reads directly as "25% off" and multiplies straight into the
/// price: `price * (1 - 0.25)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, TS)]
#[ts(export)]
pub struct Discount(f64);

impl Discount {
    /// Creates a discount, rejecting anything outside `[0.0, 1.0)`.
    pub fn new(fraction: f64) -> ValidationResult<Self> {
        validate_discount_percent(fraction)?;
        Ok(Discount(fraction))
    }

    /// Returns the fraction.
    #[inline]
    pub const fn fraction(&self) -> f64 {
        self.0
    }

    /// Checks if any markdown applies.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.0 > 0.0
    }

    /// Returns `amount` with the markdown applied, unrounded.
    #[inline]
    pub fn apply(&self, amount: f64) -> f64 {
        amount * (1.0 - self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
