//! Property-based tests for the catalog item invariants.

use ebike_core::{BikeOptions, CoreError, ElectricBike, ValidationError};
use proptest::prelude::*;

fn color_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

/// Operations a caller can apply to an item, valid or not.
#[derive(Debug, Clone)]
enum Op {
    SetStock(i64),
    SetActive(bool),
    SetPrice(f64),
    SetDiscount(f64),
    AddColor(String),
    RemoveColor(String),
    SelectColor(String),
    SetAssist(i64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-5i64..20).prop_map(Op::SetStock),
        any::<bool>().prop_map(Op::SetActive),
        (-100.0f64..5000.0).prop_map(Op::SetPrice),
        (-0.5f64..1.5).prop_map(Op::SetDiscount),
        color_strategy().prop_map(Op::AddColor),
        color_strategy().prop_map(Op::RemoveColor),
        color_strategy().prop_map(Op::SelectColor),
        (-2i64..8).prop_map(Op::SetAssist),
    ]
}

fn apply(bike: &mut ElectricBike, op: &Op) -> Result<(), CoreError> {
    match op {
        Op::SetStock(n) => bike.set_stock(*n),
        Op::SetActive(flag) => bike.set_active(*flag),
        Op::SetPrice(p) => bike.set_price(*p),
        Op::SetDiscount(d) => bike.set_discount_percent(*d),
        Op::AddColor(c) => bike.add_color(c),
        Op::RemoveColor(c) => bike.remove_color(c),
        Op::SelectColor(c) => bike.set_selected_color(c),
        Op::SetAssist(level) => bike.set_assist_level(*level),
    }
}

fn assert_invariants(bike: &ElectricBike) -> Result<(), TestCaseError> {
    if bike.stock() == 0 {
        prop_assert!(!bike.is_active());
    }
    prop_assert!(bike.available_colors().iter().any(|c| c == bike.selected_color()));
    prop_assert!((0.0..1.0).contains(&bike.discount_percent()));
    prop_assert!((1..=5).contains(&bike.assist_level()));
    prop_assert!(bike.price() >= 0.0);
    prop_assert!(bike.weight_kg() > 0.0);
    prop_assert!(bike.battery_wh() > 0);
    Ok(())
}

proptest! {
    /// Property: right after construction, active == (stock > 0).
    #[test]
    fn prop_active_matches_stock_after_construction(stock in 0i64..10_000) {
        let bike = ElectricBike::new("Bike", 100.0, BikeOptions { stock, ..Default::default() }).unwrap();
        prop_assert_eq!(bike.is_active(), stock > 0);
    }

    /// Property: current price is within half a cent of the exact
    /// discounted price, for any finite price.
    #[test]
    fn prop_current_price_is_rounded_discount(price in 0.0f64..1e300, pct in 0.0f64..1.0) {
        let mut bike = ElectricBike::new("Bike", price, BikeOptions::default()).unwrap();
        bike.set_discount_percent(pct).unwrap();

        let exact = price * (1.0 - pct);
        let current = bike.current_price();
        prop_assert!(current.is_finite());
        prop_assert!(
            (current - exact).abs() <= 0.005 + exact * 4.0 * f64::EPSILON,
            "{} is not {} rounded to cents",
            current,
            exact
        );
    }

    /// Property: adding a color twice leaves the same list as adding it once.
    #[test]
    fn prop_add_color_idempotent(color in color_strategy()) {
        let mut once = ElectricBike::new("Bike", 1.0, BikeOptions::default()).unwrap();
        once.add_color(&color).unwrap();

        let mut twice = once.clone();
        twice.add_color(&color).unwrap();

        prop_assert_eq!(once.available_colors(), twice.available_colors());
    }

    /// Property: the selected color can never be removed, and an unknown
    /// color can never be selected.
    #[test]
    fn prop_selection_never_dangles(colors in prop::collection::vec(color_strategy(), 1..6), stranger in "[A-Z]{3}") {
        let mut unique = colors.clone();
        unique.sort();
        unique.dedup();

        let mut bike = ElectricBike::new(
            "Bike",
            1.0,
            BikeOptions { available_colors: unique.clone(), ..Default::default() },
        )
        .unwrap();

        let selected = bike.selected_color().to_string();
        let removal = bike.remove_color(&selected);
        prop_assert!(
            matches!(
                removal,
                Err(CoreError::InvalidArgument(ValidationError::SelectedColorInUse { .. }))
            ),
            "removing the selection must fail"
        );

        prop_assert!(bike.set_selected_color(&stranger).is_err());
        prop_assert_eq!(bike.selected_color(), selected.as_str());
        prop_assert_eq!(bike.available_colors(), unique);
    }

    /// Property: activation is refused exactly when stock is zero.
    #[test]
    fn prop_activation_guarded_by_stock(stock in 0i64..50) {
        let mut bike = ElectricBike::new("Bike", 1.0, BikeOptions { stock, ..Default::default() }).unwrap();
        bike.set_active(false).unwrap();
        prop_assert_eq!(bike.set_active(true).is_ok(), stock > 0);
        prop_assert_eq!(bike.is_active(), stock > 0);
    }

    /// Property: any sequence of operations, valid or not, keeps every
    /// invariant, and a failed operation changes nothing.
    #[test]
    fn prop_invariants_survive_any_operation_sequence(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut bike = ElectricBike::new("Bike", 1000.0, BikeOptions { stock: 1, ..Default::default() }).unwrap();

        for op in &ops {
            let before = bike.clone();
            if apply(&mut bike, op).is_err() {
                prop_assert_eq!(&bike, &before, "failed {:?} mutated the item", op);
            }
            assert_invariants(&bike)?;
        }
    }
}

#[test]
fn assist_level_boundaries() {
    let mut bike = ElectricBike::new("Bike", 1.0, BikeOptions::default()).unwrap();
    for level in 1..=5 {
        assert!(bike.set_assist_level(level).is_ok());
    }
    assert!(bike.set_assist_level(0).is_err());
    assert!(bike.set_assist_level(6).is_err());
}

#[test]
fn discount_boundaries() {
    let mut bike = ElectricBike::new("Bike", 1.0, BikeOptions::default()).unwrap();
    assert!(bike.set_discount_percent(0.0).is_ok());
    assert!(bike.set_discount_percent(0.9999).is_ok());
    assert!(bike.set_discount_percent(1.0).is_err());
    assert!(bike.set_discount_percent(-0.01).is_err());
}

#[test]
fn current_price_reference_values() {
    let cases = [
        (0.125, 0.0, 0.12),
        (0.375, 0.0, 0.38),
        (0.25, 0.5, 0.12),
        (1299.99, 0.2, 1039.99),
        (2000.0, 0.1, 1800.0),
        (1e17, 0.0, 1e17),
        (1e300, 0.0, 1e300),
    ];

    for (price, pct, expected) in cases {
        let mut bike = ElectricBike::new("Bike", price, BikeOptions::default()).unwrap();
        bike.set_discount_percent(pct).unwrap();
        assert_eq!(bike.current_price(), expected, "price {price} at {pct}");
    }
}
