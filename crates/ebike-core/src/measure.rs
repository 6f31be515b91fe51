//! # Measurements
//!
//! Unit conversion and the range estimate.
//!
//! ## Range Model
//! ```text
//! range_km = battery_wh × 0.16 × (3 / assist_level) × (75 / rider_kg)
//!            ─────────   ────   ─────────────────   ──────────────
//!            capacity    km/Wh  more assist,        heavier rider,
//!                        @ref   shorter range       shorter range
//! ```
//! Linear on purpose. It is a catalog figure, not a physical simulation.

use crate::types::AssistLevel;
use crate::{BASE_EFFICIENCY_KM_PER_WH, LB_PER_KG, REFERENCE_ASSIST_LEVEL, REFERENCE_RIDER_KG};

/// Rounds `value` to `places` decimal places, exact halves to the even digit.
///
/// Values too large to carry any digit below `places` come back unchanged.
///
/// ## Example
/// ```rust
/// use ebike_core::measure::round_to;
///
/// assert_eq!(round_to(22.046226218, 3), 22.046);
/// assert_eq!(round_to(1.411764, 2), 1.41);
/// assert_eq!(round_to(0.125, 2), 0.12);
/// assert_eq!(round_to(1e300, 2), 1e300);
/// ```
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let scaled = value * scale;
    // from 2^52 up every f64 is already a whole number
    if !scaled.is_finite() || scaled.abs() >= MAX_FRACTIONAL {
        return value;
    }
    scaled.round_ties_even() / scale
}

/// Smallest magnitude at which an `f64` has no fractional part (2^52).
const MAX_FRACTIONAL: f64 = 4_503_599_627_370_496.0;

/// Converts kilograms to pounds, rounded to 3 decimals.
pub fn kg_to_lb(kg: f64) -> f64 {
    round_to(kg * LB_PER_KG, 3)
}

/// Estimated range in kilometres, rounded to 2 decimals.
///
/// Callers validate `rider_weight_kg > 0` first.
pub fn estimated_range_km(battery_wh: i64, assist_level: AssistLevel, rider_weight_kg: f64) -> f64 {
    let assist_factor = REFERENCE_ASSIST_LEVEL / f64::from(assist_level.get());
    let weight_factor = REFERENCE_RIDER_KG / rider_weight_kg;

    round_to(
        battery_wh as f64 * BASE_EFFICIENCY_KM_PER_WH * assist_factor * weight_factor,
        2,
    )
}
