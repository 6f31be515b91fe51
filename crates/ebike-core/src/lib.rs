//! # ebike-core: Electric Bike Catalog Item
//!
//! This crate models one sellable electric bicycle, the catalog item, and
//! keeps every field of it valid across all operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ebike-core                                       │
//! │                                                                         │
//! │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐           │
//! │   │  options  │─►│   bike    │◄─│validation │  │   types   │           │
//! │   │ defaults  │  │ Electric  │  │   rules   │  │AssistLevel│           │
//! │   │ JSON load │  │   Bike    │  │           │  │ Discount  │           │
//! │   └───────────┘  └─────┬─────┘  └───────────┘  └───────────┘           │
//! │                        │                                                │
//! │              ┌─────────┴─────────┐                                      │
//! │              ▼                   ▼                                      │
//! │        ┌───────────┐       ┌───────────┐                                │
//! │        │   money   │       │  measure  │                                │
//! │        │  rounding │       │ lb, range │                                │
//! │        └───────────┘       └───────────┘                                │
//! │                                                                         │
//! │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`bike`] - The `ElectricBike` entity
//! - [`options`] - Construction options with defaults, and their JSON loader
//! - [`types`] - Bounded value types (assist level, discount)
//! - [`money`] - Cent-rounded prices
//! - [`measure`] - Unit conversion and the range model
//! - [`validation`] - Field rules
//! - [`error`] - Domain error types
//!
//! ## Invariants
//!
//! 1. `stock == 0` implies the item is inactive
//! 2. The selected color is always one of the available colors
//! 3. Discount is in `[0.0, 1.0)`, assist level is in `1..=5`
//! 4. Price is non-negative; weight and battery capacity are positive
//!
//! ## Example Usage
//!
//! ```rust
//! use ebike_core::{BikeOptions, ElectricBike};
//!
//! let mut bike = ElectricBike::new(
//!     "MEC Midtown 2",
//!     2000.0,
//!     BikeOptions { stock: 1, ..Default::default() },
//! )
//! .unwrap();
//!
//! bike.set_discount_percent(0.10).unwrap();
//! assert_eq!(bike.current_price(), 1800.0);
//! assert!(bike.is_active());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bike;
pub mod error;
pub mod measure;
pub mod money;
pub mod options;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use bike::ElectricBike;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use options::BikeOptions;
pub use types::{AssistLevel, Discount};

// =============================================================================
// Catalog Defaults
// =============================================================================

/// Frame weight used when none is given.
pub const DEFAULT_WEIGHT_KG: f64 = 22.5;

/// Battery capacity used when none is given.
pub const DEFAULT_BATTERY_WH: i64 = 450;

/// Assist level used when none is given.
pub const DEFAULT_ASSIST_LEVEL: i64 = 3;

/// Colors offered when none are given. The first one is selected.
pub const DEFAULT_COLORS: [&str; 3] = ["black", "silver", "red"];

/// Feature flags set when none are given.
pub const DEFAULT_FEATURES: [(&str, bool); 3] = [
    ("hasRack", true),
    ("hasLights", true),
    ("hasFenders", false),
];

// =============================================================================
// Model Constants
// =============================================================================

/// Pounds per kilogram.
pub const LB_PER_KG: f64 = 2.2046226218;

/// Kilometres per watt-hour at the reference assist level and rider weight.
pub const BASE_EFFICIENCY_KM_PER_WH: f64 = 0.16;

/// Rider weight the efficiency figure is calibrated for.
pub const REFERENCE_RIDER_KG: f64 = 75.0;

/// Assist level the efficiency figure is calibrated for.
pub const REFERENCE_ASSIST_LEVEL: f64 = 3.0;
