//! # Error Types
//!
//! Domain-specific error types for ebike-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError                                                              │
//! │  ├── TypeMismatch     - value has the wrong kind (JSON input only)     │
//! │  └── InvalidArgument  - value has the right kind, breaks a rule        │
//! │       └── ValidationError - which rule, and for which field            │
//! │                                                                         │
//! │  Flow: validation fn → ValidationError → CoreError → caller            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every error names the offending field
//! 3. Errors are enum variants, never String
//! 4. A failed operation leaves the item untouched

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by catalog item operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Argument has the wrong kind.
    ///
    /// ## When This Occurs
    /// Only on the dynamic construction path, where options arrive as
    /// JSON values, e.g. `"stock": "five"` or `"features": {"hasRack": "yes"}`.
    /// Kind checks run before any domain rule.
    #[error("{field} must be {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Argument has the right kind but violates a domain constraint.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Domain rule violations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required text field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Integer value is outside an inclusive range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must lie in `[0.0, 1.0)`.
    #[error("{field} must be at least 0.0 and below 1.0")]
    MustBeFraction { field: String },

    /// Invalid format (e.g., NaN where a number is needed, malformed JSON).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g., a color listed twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// The color to remove is the one currently selected.
    #[error("cannot remove selected color '{color}'; select another color first")]
    SelectedColorInUse { color: String },

    /// Tried to activate an item that has nothing in stock.
    #[error("cannot activate '{name}' while stock is 0")]
    ActivationWithoutStock { name: String },
}

impl ValidationError {
    /// Returns the name of the field this error is about.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::MustBePositive { field }
            | ValidationError::MustBeNonNegative { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::MustBeFraction { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NotAllowed { field, .. }
            | ValidationError::Duplicate { field, .. } => field,
            ValidationError::SelectedColorInUse { .. } => "color",
            ValidationError::ActivationWithoutStock { .. } => "active",
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::TypeMismatch {
            field: "stock".to_string(),
            expected: "an integer",
            found: "a string",
        };
        assert_eq!(err.to_string(), "stock must be an integer, got a string");

        let err = ValidationError::SelectedColorInUse {
            color: "black".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot remove selected color 'black'; select another color first"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "assist_level".to_string(),
            min: 1,
            max: 5,
        };
        assert_eq!(err.to_string(), "assist_level must be between 1 and 5");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::InvalidArgument(_)));
        assert_eq!(core_err.to_string(), "Invalid argument: price must not be negative");
    }

    #[test]
    fn test_field_names() {
        let err = ValidationError::MustBeFraction {
            field: "discount_percent".to_string(),
        };
        assert_eq!(err.field(), "discount_percent");

        let err = ValidationError::ActivationWithoutStock {
            name: "Bike".to_string(),
        };
        assert_eq!(err.field(), "active");
    }
}
