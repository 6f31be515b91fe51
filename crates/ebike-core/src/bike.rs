//! # Electric Bike
//!
//! The catalog item: one electric bicycle offered for sale.
//!
//! ## Dependent Fields
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  stock ──────────► active         stock = 0  ⇒ active = false          │
//! │                      ▲            stock > 0  ⇒ active = true           │
//! │  set_active ─────────┘            (true refused while stock = 0)       │
//! │                                                                         │
//! │  price ───┐                                                             │
//! │           ├──────► current_price  round(price × (1 − discount), 2)     │
//! │  discount ┘                       computed on every read               │
//! │                                                                         │
//! │  available_colors ◄── selected_color   selection is always a member;   │
//! │                                        the selected color can't go     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every setter validates first and mutates after, so a failed call leaves
//! the item exactly as it was.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::measure;
use crate::money::Money;
use crate::options::{self, BikeOptions};
use crate::types::{AssistLevel, Discount};
use crate::validation::{
    validate_battery_wh, validate_color, validate_color_available, validate_colors,
    validate_feature_key, validate_name, validate_price, validate_rider_weight_kg,
    validate_stock, validate_weight_kg,
};
use crate::REFERENCE_RIDER_KG;

/// An electric bicycle in the catalog.
///
/// Fields are private; every change goes through a validating method.
/// Collection accessors hand out copies.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ElectricBike {
    name: String,
    price: f64,
    stock: i64,
    #[serde(rename = "isActive")]
    active: bool,
    weight_kg: f64,
    available_colors: Vec<String>,
    selected_color: String,
    features: BTreeMap<String, bool>,
    battery_wh: i64,
    assist_level: AssistLevel,
    #[serde(rename = "discountPercent")]
    discount: Discount,
}

impl ElectricBike {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a catalog item.
    ///
    /// The item starts active exactly when `options.stock > 0`.
    ///
    /// ## Errors
    /// `InvalidArgument` naming the first field that breaks its rule:
    /// blank name, negative price or stock, non-positive weight or battery,
    /// assist level outside 1..=5, discount outside [0, 1), empty or
    /// duplicated colors, a selected color that is not available, or a
    /// blank feature key.
    ///
    /// ## Example
    /// ```rust
    /// use ebike_core::{BikeOptions, ElectricBike};
    ///
    /// let bike = ElectricBike::new(
    ///     "MEC Midtown 2 Bicycle",
    ///     1299.99,
    ///     BikeOptions { stock: 5, ..Default::default() },
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(bike.selected_color(), "black");
    /// assert!(bike.is_active());
    /// ```
    pub fn new(name: &str, price: f64, options: BikeOptions) -> CoreResult<Self> {
        let name = validate_name(name)?;
        validate_price(price)?;
        validate_stock(options.stock)?;
        validate_weight_kg(options.weight_kg)?;

        let available_colors = validate_colors(&options.available_colors)?;
        let selected_color = match options.selected_color {
            Some(color) => {
                let color = validate_color(&color)?;
                validate_color_available(&color, &available_colors)?;
                color
            }
            // validate_colors guarantees at least one entry
            None => available_colors[0].clone(),
        };

        let mut features = BTreeMap::new();
        for (key, enabled) in options.features {
            features.insert(validate_feature_key(&key)?, enabled);
        }

        validate_battery_wh(options.battery_wh)?;
        let assist_level = AssistLevel::new(options.assist_level)?;
        let discount = Discount::new(options.discount_percent)?;

        let bike = ElectricBike {
            name,
            price,
            stock: options.stock,
            active: options.stock > 0,
            weight_kg: options.weight_kg,
            available_colors,
            selected_color,
            features,
            battery_wh: options.battery_wh,
            assist_level,
            discount,
        };

        debug!(
            name = %bike.name,
            price = bike.price,
            stock = bike.stock,
            active = bike.active,
            "Created catalog item"
        );

        Ok(bike)
    }

    /// Creates a catalog item from a JSON object.
    ///
    /// `name` and `price` are required; the remaining keys are the
    /// camelCase options read by [`BikeOptions::from_value`].
    ///
    /// ## Example
    /// ```rust
    /// use ebike_core::ElectricBike;
    /// use serde_json::json;
    ///
    /// let bike = ElectricBike::from_value(&json!({
    ///     "name": "Bike",
    ///     "price": 1000.0,
    ///     "stock": 1,
    ///     "availableColors": ["black", "blue"]
    /// }))
    /// .unwrap();
    /// assert_eq!(bike.available_colors(), vec!["black", "blue"]);
    /// ```
    pub fn from_value(value: &Value) -> CoreResult<Self> {
        let object = options::expect_object("item", value)?;

        let name = match object.get("name") {
            Some(v) => options::expect_string("name", v)?,
            None => return Err(required("name")),
        };
        let price = match object.get("price") {
            Some(v) => options::expect_number("price", v)?,
            None => return Err(required("price")),
        };

        let opts = BikeOptions::from_entries(
            object
                .iter()
                .filter(|(key, _)| key.as_str() != "name" && key.as_str() != "price")
                .map(|(key, v)| (key.as_str(), v)),
        )?;

        Self::new(name, price, opts)
    }

    /// Parses JSON text and creates a catalog item from it.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| ValidationError::InvalidFormat {
            field: "json".to_string(),
            reason: e.to_string(),
        })?;
        Self::from_value(&value)
    }

    /// Returns the current configuration as construction options.
    ///
    /// `ElectricBike::new(bike.name(), bike.price(), bike.options())`
    /// rebuilds an equal item, except that a deactivated item with stock
    /// comes back active.
    pub fn options(&self) -> BikeOptions {
        BikeOptions {
            stock: self.stock,
            weight_kg: self.weight_kg,
            available_colors: self.available_colors.clone(),
            selected_color: Some(self.selected_color.clone()),
            features: self.features.clone(),
            battery_wh: self.battery_wh,
            assist_level: i64::from(self.assist_level.get()),
            discount_percent: self.discount.fraction(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base price before any discount.
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Weight in pounds, rounded to 3 decimals.
    pub fn weight_lb(&self) -> f64 {
        measure::kg_to_lb(self.weight_kg)
    }

    pub fn battery_wh(&self) -> i64 {
        self.battery_wh
    }

    pub fn assist_level(&self) -> u8 {
        self.assist_level.get()
    }

    pub fn selected_color(&self) -> &str {
        &self.selected_color
    }

    /// Returns a copy of the available colors, in order.
    pub fn available_colors(&self) -> Vec<String> {
        self.available_colors.clone()
    }

    /// Returns a copy of the feature flags.
    pub fn features(&self) -> BTreeMap<String, bool> {
        self.features.clone()
    }

    pub fn discount_percent(&self) -> f64 {
        self.discount.fraction()
    }

    /// Price after discount as whole cents.
    ///
    /// `None` when the price is too large for `Money`; use
    /// [`current_price`](Self::current_price) for those.
    pub fn current_price_money(&self) -> Option<Money> {
        Money::try_from_amount(self.discount.apply(self.price))
    }

    /// Price after discount, rounded to 2 decimals.
    ///
    /// ## Example
    /// ```rust
    /// use ebike_core::{BikeOptions, ElectricBike};
    ///
    /// let mut bike = ElectricBike::new("Bike", 1299.99, BikeOptions::default()).unwrap();
    /// bike.set_discount_percent(0.20).unwrap();
    /// assert_eq!(bike.current_price(), 1039.99);
    /// ```
    pub fn current_price(&self) -> f64 {
        measure::round_to(self.discount.apply(self.price), 2)
    }

    pub fn is_on_sale(&self) -> bool {
        self.discount.is_active()
    }

    /// Whether the item is offered for sale. Never true while stock is 0.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Estimated range in km for a rider of the given weight.
    ///
    /// ## Errors
    /// `InvalidArgument` if `rider_weight_kg` is not a positive number.
    pub fn estimated_range_km(&self, rider_weight_kg: f64) -> CoreResult<f64> {
        validate_rider_weight_kg(rider_weight_kg)?;
        Ok(measure::estimated_range_km(
            self.battery_wh,
            self.assist_level,
            rider_weight_kg,
        ))
    }

    /// Estimated range in km for a 75 kg rider.
    pub fn estimated_range_km_default(&self) -> f64 {
        measure::estimated_range_km(self.battery_wh, self.assist_level, REFERENCE_RIDER_KG)
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    pub fn set_price(&mut self, price: f64) -> CoreResult<()> {
        validate_price(price)?;
        self.price = price;
        debug!(name = %self.name, price, "Price updated");
        Ok(())
    }

    pub fn set_discount_percent(&mut self, pct: f64) -> CoreResult<()> {
        self.discount = Discount::new(pct)?;
        debug!(name = %self.name, discount = pct, "Discount updated");
        Ok(())
    }

    /// Sets the stock level and follows it with the active flag.
    ///
    /// Zero deactivates. Any positive level activates, including an item
    /// that was switched off with [`set_active`](Self::set_active).
    pub fn set_stock(&mut self, stock: i64) -> CoreResult<()> {
        validate_stock(stock)?;
        self.stock = stock;
        self.active = stock > 0;
        debug!(name = %self.name, stock, active = self.active, "Stock updated");
        Ok(())
    }

    /// Switches the item on or off.
    ///
    /// ## Errors
    /// `InvalidArgument(ActivationWithoutStock)` when activating at zero stock.
    pub fn set_active(&mut self, active: bool) -> CoreResult<()> {
        if active && self.stock == 0 {
            return Err(ValidationError::ActivationWithoutStock {
                name: self.name.clone(),
            }
            .into());
        }
        self.active = active;
        debug!(name = %self.name, active, "Active flag updated");
        Ok(())
    }

    /// Appends a color. Adding a color that is already offered does nothing.
    pub fn add_color(&mut self, color: &str) -> CoreResult<()> {
        let color = validate_color(color)?;
        if self.available_colors.contains(&color) {
            return Ok(());
        }
        debug!(name = %self.name, color = %color, "Color added");
        self.available_colors.push(color);
        Ok(())
    }

    /// Removes a color, keeping the order of the rest.
    ///
    /// ## Errors
    /// - `NotAllowed` if the color is not offered
    /// - `SelectedColorInUse` if it is the selected color
    pub fn remove_color(&mut self, color: &str) -> CoreResult<()> {
        let color = color.trim();
        let index = self
            .available_colors
            .iter()
            .position(|c| c == color)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "color".to_string(),
                allowed: self.available_colors.clone(),
            })?;

        if self.selected_color == color {
            return Err(ValidationError::SelectedColorInUse {
                color: color.to_string(),
            }
            .into());
        }

        self.available_colors.remove(index);
        debug!(name = %self.name, color, "Color removed");
        Ok(())
    }

    pub fn set_selected_color(&mut self, color: &str) -> CoreResult<()> {
        let color = color.trim();
        validate_color_available(color, &self.available_colors)?;
        self.selected_color = color.to_string();
        debug!(name = %self.name, color, "Selected color updated");
        Ok(())
    }

    /// Inserts or overwrites a feature flag. Any non-blank key is accepted.
    pub fn set_feature(&mut self, key: &str, enabled: bool) -> CoreResult<()> {
        let key = validate_feature_key(key)?;
        debug!(name = %self.name, feature = %key, enabled, "Feature updated");
        self.features.insert(key, enabled);
        Ok(())
    }

    pub fn set_battery_wh(&mut self, battery_wh: i64) -> CoreResult<()> {
        validate_battery_wh(battery_wh)?;
        self.battery_wh = battery_wh;
        debug!(name = %self.name, battery_wh, "Battery capacity updated");
        Ok(())
    }

    pub fn set_assist_level(&mut self, level: i64) -> CoreResult<()> {
        self.assist_level = AssistLevel::new(level)?;
        debug!(name = %self.name, level, "Assist level updated");
        Ok(())
    }
}

fn required(field: &str) -> CoreError {
    ValidationError::Required {
        field: field.to_string(),
    }
    .into()
}

// =============================================================================
// Unit Tests
// =============================================================================
