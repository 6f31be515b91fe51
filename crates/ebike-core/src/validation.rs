//! # Validation Module
//!
//! Field rules for the catalog item.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Order                                   │
//! │                                                                         │
//! │  Step 1: Kind                                                          │
//! │  ├── Rust signatures for the typed API                                 │
//! │  └── options::from_value for JSON input (TypeMismatch)                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Step 2: Domain rule (THIS MODULE)                                     │
//! │  ├── finite, sign, range                                               │
//! │  └── non-blank text, unique colors                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Step 3: Mutation (bike module)                                        │
//! │  └── only after every check passed                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ebike_core::validation::{validate_price, validate_stock};
//!
//! assert!(validate_price(1299.99).is_ok());
//! assert!(validate_stock(-3).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Lowest assist level.
pub const MIN_ASSIST_LEVEL: i64 = 1;

/// Highest assist level.
pub const MAX_ASSIST_LEVEL: i64 = 5;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name and returns it trimmed.
///
/// ## Example
/// ```rust
/// use ebike_core::validation::validate_name;
///
/// assert_eq!(validate_name("  Midtown 2 ").unwrap(), "Midtown 2");
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<String> {
    require_text("name", name)
}

/// Validates a color label and returns it trimmed.
pub fn validate_color(color: &str) -> ValidationResult<String> {
    require_text("color", color)
}

/// Validates a feature key and returns it trimmed.
pub fn validate_feature_key(key: &str) -> ValidationResult<String> {
    require_text("feature", key)
}

fn require_text(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(value.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a base price.
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative (>= 0); zero is allowed
///
/// ## Example
/// ```rust
/// use ebike_core::validation::validate_price;
///
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(-0.01).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    require_finite("price", price)?;

    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level. Zero is allowed.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

/// Validates the bike's own weight in kilograms (> 0).
pub fn validate_weight_kg(weight_kg: f64) -> ValidationResult<()> {
    require_positive("weight_kg", weight_kg)
}

/// Validates a rider weight in kilograms (> 0).
pub fn validate_rider_weight_kg(rider_weight_kg: f64) -> ValidationResult<()> {
    require_positive("rider_weight_kg", rider_weight_kg)
}

/// Validates a battery capacity in watt-hours (> 0).
pub fn validate_battery_wh(battery_wh: i64) -> ValidationResult<()> {
    if battery_wh <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "battery_wh".to_string(),
        });
    }

    Ok(())
}

/// Validates an assist level.
///
/// ## Rules
/// - Must be between 1 and 5 inclusive
///
/// ## Example
/// ```rust
/// use ebike_core::validation::validate_assist_level;
///
/// assert_eq!(validate_assist_level(5).unwrap(), 5);
/// assert!(validate_assist_level(0).is_err());
/// assert!(validate_assist_level(6).is_err());
/// ```
pub fn validate_assist_level(level: i64) -> ValidationResult<u8> {
    if !(MIN_ASSIST_LEVEL..=MAX_ASSIST_LEVEL).contains(&level) {
        return Err(ValidationError::OutOfRange {
            field: "assist_level".to_string(),
            min: MIN_ASSIST_LEVEL,
            max: MAX_ASSIST_LEVEL,
        });
    }

    Ok(level as u8)
}

/// Validates a discount fraction.
///
/// ## Rules
/// - Must be finite
/// - `0.0 <= pct < 1.0`
pub fn validate_discount_percent(pct: f64) -> ValidationResult<()> {
    require_finite("discount_percent", pct)?;

    if !(0.0..1.0).contains(&pct) {
        return Err(ValidationError::MustBeFraction {
            field: "discount_percent".to_string(),
        });
    }

    Ok(())
}

fn require_finite(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    Ok(())
}

fn require_positive(field: &str, value: f64) -> ValidationResult<()> {
    require_finite(field, value)?;

    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates a color list and returns the trimmed labels in order.
///
/// ## Rules
/// - Must contain at least one color
/// - Every label must be non-blank
/// - No label may appear twice
pub fn validate_colors(colors: &[String]) -> ValidationResult<Vec<String>> {
    if colors.is_empty() {
        return Err(ValidationError::Required {
            field: "available_colors".to_string(),
        });
    }

    let mut cleaned: Vec<String> = Vec::with_capacity(colors.len());
    for color in colors {
        let color = validate_color(color)?;
        if cleaned.contains(&color) {
            return Err(ValidationError::Duplicate {
                field: "available_colors".to_string(),
                value: color,
            });
        }
        cleaned.push(color);
    }

    Ok(cleaned)
}

/// Checks that `color` is one of `available`.
pub fn validate_color_available(color: &str, available: &[String]) -> ValidationResult<()> {
    if !available.iter().any(|c| c == color) {
        return Err(ValidationError::NotAllowed {
            field: "color".to_string(),
            allowed: available.to_vec(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
