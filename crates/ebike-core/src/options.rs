//! # Construction Options
//!
//! Everything besides name and price that an `ElectricBike` can be created
//! with, each with a default.
//!
//! ## Option Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rust callers                          JSON callers                     │
//! │                                                                         │
//! │  BikeOptions {                         { "stock": 2,                    │
//! │      stock: 2,                           "assistLevel": 4 }             │
//! │      ..Default::default()                       │                       │
//! │  }                                              ▼                       │
//! │      │                                 BikeOptions::from_value          │
//! │      │                                 (kind checks → TypeMismatch)     │
//! │      │                                          │                       │
//! │      └──────────────┬───────────────────────────┘                       │
//! │                     ▼                                                   │
//! │           ElectricBike::new (domain checks → InvalidArgument)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Defaults
//! | Option | Default |
//! |---|---|
//! | `stock` | 0 |
//! | `weight_kg` | 22.5 |
//! | `available_colors` | black, silver, red |
//! | `selected_color` | first available color |
//! | `features` | hasRack, hasLights on; hasFenders off |
//! | `battery_wh` | 450 |
//! | `assist_level` | 3 |
//! | `discount_percent` | 0.0 |

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::{
    DEFAULT_ASSIST_LEVEL, DEFAULT_BATTERY_WH, DEFAULT_COLORS, DEFAULT_FEATURES, DEFAULT_WEIGHT_KG,
};

/// Keys accepted by [`BikeOptions::from_value`].
pub const OPTION_KEYS: [&str; 8] = [
    "stock",
    "weightKg",
    "availableColors",
    "selectedColor",
    "features",
    "batteryWh",
    "assistLevel",
    "discountPercent",
];

/// Optional construction settings for an `ElectricBike`.
///
/// Values are not checked until they reach `ElectricBike::new`.
#[derive(Debug, Clone, PartialEq)]
pub struct BikeOptions {
    pub stock: i64,
    pub weight_kg: f64,
    pub available_colors: Vec<String>,
    /// `None` selects the first available color.
    pub selected_color: Option<String>,
    pub features: BTreeMap<String, bool>,
    pub battery_wh: i64,
    pub assist_level: i64,
    pub discount_percent: f64,
}

impl Default for BikeOptions {
    /// Builds the defaults. Colors and features are allocated per call.
    fn default() -> Self {
        BikeOptions {
            stock: 0,
            weight_kg: DEFAULT_WEIGHT_KG,
            available_colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            selected_color: None,
            features: DEFAULT_FEATURES
                .iter()
                .map(|(key, enabled)| (key.to_string(), *enabled))
                .collect(),
            battery_wh: DEFAULT_BATTERY_WH,
            assist_level: DEFAULT_ASSIST_LEVEL,
            discount_percent: 0.0,
        }
    }
}

impl BikeOptions {
    /// Reads options from a JSON object with camelCase keys.
    ///
    /// Missing keys keep their default. Every present value must have the
    /// right JSON kind; range rules are left to `ElectricBike::new`.
    ///
    /// ## Errors
    /// - `TypeMismatch` if `value` is not an object or a key has the wrong kind
    /// - `InvalidArgument(NotAllowed)` for an unrecognized key
    ///
    /// ## Example
    /// ```rust
    /// use ebike_core::BikeOptions;
    /// use serde_json::json;
    ///
    /// let opts = BikeOptions::from_value(&json!({ "stock": 2, "assistLevel": 4 })).unwrap();
    /// assert_eq!(opts.stock, 2);
    /// assert_eq!(opts.assist_level, 4);
    /// assert_eq!(opts.battery_wh, 450);
    ///
    /// assert!(BikeOptions::from_value(&json!({ "stock": "two" })).is_err());
    /// ```
    pub fn from_value(value: &Value) -> CoreResult<Self> {
        let object = expect_object("options", value)?;
        Self::from_entries(object.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// Applies `(key, value)` pairs on top of the defaults.
    pub(crate) fn from_entries<'a, I>(entries: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a Value)>,
    {
        let mut opts = BikeOptions::default();

        for (key, value) in entries {
            match key {
                "stock" => opts.stock = expect_integer(key, value)?,
                "weightKg" => opts.weight_kg = expect_number(key, value)?,
                "availableColors" => opts.available_colors = expect_string_list(key, value)?,
                "selectedColor" => {
                    opts.selected_color = match value {
                        Value::Null => None,
                        other => Some(expect_string(key, other)?.to_string()),
                    }
                }
                "features" => opts.features = expect_flag_map(key, value)?,
                "batteryWh" => opts.battery_wh = expect_integer(key, value)?,
                "assistLevel" => opts.assist_level = expect_integer(key, value)?,
                "discountPercent" => opts.discount_percent = expect_number(key, value)?,
                other => {
                    return Err(ValidationError::NotAllowed {
                        field: other.to_string(),
                        allowed: OPTION_KEYS.iter().map(|k| k.to_string()).collect(),
                    }
                    .into())
                }
            }
        }

        Ok(opts)
    }
}

// =============================================================================
// JSON Kind Checks
// =============================================================================

/// Names the JSON kind of a value for error messages.
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_f64() => "a float",
        Value::Number(_) => "an integer",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn mismatch(field: &str, expected: &'static str, value: &Value) -> CoreError {
    CoreError::TypeMismatch {
        field: field.to_string(),
        expected,
        found: kind_of(value),
    }
}

pub(crate) fn expect_object<'a>(field: &str, value: &'a Value) -> CoreResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| mismatch(field, "an object", value))
}

pub(crate) fn expect_string<'a>(field: &str, value: &'a Value) -> CoreResult<&'a str> {
    value.as_str().ok_or_else(|| mismatch(field, "a string", value))
}

pub(crate) fn expect_number(field: &str, value: &Value) -> CoreResult<f64> {
    value.as_f64().ok_or_else(|| mismatch(field, "a number", value))
}

/// Integers only: `2.0` is a float and is rejected.
fn expect_integer(field: &str, value: &Value) -> CoreResult<i64> {
    value.as_i64().ok_or_else(|| mismatch(field, "an integer", value))
}

fn expect_string_list(field: &str, value: &Value) -> CoreResult<Vec<String>> {
    let items = value
        .as_array()
        .ok_or_else(|| mismatch(field, "an array of strings", value))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| mismatch(field, "an array of strings", item))
        })
        .collect()
}

fn expect_flag_map(field: &str, value: &Value) -> CoreResult<BTreeMap<String, bool>> {
    let object = expect_object(field, value)?;

    object
        .iter()
        .map(|(key, flag)| {
            flag.as_bool()
                .map(|enabled| (key.clone(), enabled))
                .ok_or_else(|| mismatch(&format!("{field}.{key}"), "a boolean", flag))
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
