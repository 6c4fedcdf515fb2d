//! 절감액 계산 회귀 테스트.
use pellet_savings::fuel::{CostTable, FuelCatalog, ModelCatalog};
use pellet_savings::savings::{calculate_savings, ValidationError};

fn priced_catalog() -> FuelCatalog {
    let mut fuels = FuelCatalog::new();
    let costs: CostTable = [("lpg", 50.0), ("pellet", 10.0)].into_iter().collect();
    fuels.apply_costs(&costs);
    fuels
}

#[test]
fn lpg_two_per_hour_scenario() {
    let fuels = priced_catalog();
    let models = ModelCatalog::builtin();
    let res = calculate_savings(&fuels, &models, "lpg", 2.0).expect("lpg calc");

    assert!((res.required_capacity - 24_000.0).abs() < 1e-9);
    assert!((res.pellet_consumption - 5.853_658_5).abs() < 1e-6);
    assert!((res.hourly_saving - 41.463_414_6).abs() < 1e-6);
    assert!((res.monthly_saving - 29_853.658_5).abs() < 1e-3);
    assert!((res.yearly_saving - 363_219.512_2).abs() < 1e-3);
    assert_eq!(res.fuel_consumption, 2.0);
    assert_eq!(res.selected_model.expect("model").name, "IB-150");
}

#[test]
fn pellet_consumption_matches_heat_output_for_every_fuel() {
    let fuels = FuelCatalog::new();
    let models = ModelCatalog::builtin();
    let pellet_cv = fuels.pellet().calorific_value;
    for profile in fuels.profiles() {
        for usage in [0.5, 1.0, 7.25, 120.0] {
            let res = calculate_savings(&fuels, &models, profile.id, usage).expect("calc");
            let expected = usage * profile.calorific_value / pellet_cv;
            assert!(
                (res.pellet_consumption - expected).abs() < 1e-9,
                "fuel={} usage={usage} got={}",
                profile.id,
                res.pellet_consumption
            );
        }
    }
}

#[test]
fn monthly_and_yearly_scale_hourly() {
    let fuels = priced_catalog();
    let models = ModelCatalog::builtin();
    let res = calculate_savings(&fuels, &models, "lpg", 3.5).expect("calc");
    assert!((res.monthly_saving - res.hourly_saving * 720.0).abs() < 1e-9);
    assert!((res.yearly_saving - res.hourly_saving * 8760.0).abs() < 1e-9);
}

#[test]
fn zero_costs_give_zero_savings() {
    let fuels = FuelCatalog::new();
    let models = ModelCatalog::builtin();
    let res = calculate_savings(&fuels, &models, "diesel", 10.0).expect("calc");
    assert_eq!(res.hourly_saving, 0.0);
    assert_eq!(res.monthly_saving, 0.0);
    assert_eq!(res.yearly_saving, 0.0);
    assert!(res.pellet_consumption > 0.0);
}

#[test]
fn expensive_pellets_give_negative_saving() {
    let mut fuels = FuelCatalog::new();
    let costs: CostTable = [("wood", 5.0), ("pellet", 12.0)].into_iter().collect();
    fuels.apply_costs(&costs);
    let res = calculate_savings(&fuels, &ModelCatalog::builtin(), "wood", 4.0).expect("calc");
    assert!(res.hourly_saving < 0.0, "hourly={}", res.hourly_saving);
}

#[test]
fn pellet_as_current_fuel_saves_nothing() {
    let fuels = priced_catalog();
    let res = calculate_savings(&fuels, &ModelCatalog::builtin(), "pellet", 6.0).expect("calc");
    assert!((res.pellet_consumption - 6.0).abs() < 1e-12);
    assert!(res.hourly_saving.abs() < 1e-9);
}

#[test]
fn oversized_demand_has_no_model() {
    let fuels = FuelCatalog::new();
    let res = calculate_savings(&fuels, &ModelCatalog::builtin(), "lpg", 200.0).expect("calc");
    assert!(res.required_capacity > 2_000_000.0);
    assert!(res.selected_model.is_none());
}

#[test]
fn fuel_lookup_ignores_ascii_case() {
    let fuels = FuelCatalog::new();
    let res = calculate_savings(&fuels, &ModelCatalog::builtin(), "FurnaceOIL", 1.0).expect("calc");
    assert_eq!(res.fuel.id, "furnaceOil");
}

#[test]
fn rejects_non_positive_or_non_finite_usage() {
    let fuels = priced_catalog();
    let models = ModelCatalog::builtin();
    for usage in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = calculate_savings(&fuels, &models, "lpg", usage).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidUsage(_)), "usage={usage}");
    }
}

#[test]
fn rejects_missing_and_unknown_fuel() {
    let fuels = priced_catalog();
    let models = ModelCatalog::builtin();
    assert_eq!(
        calculate_savings(&fuels, &models, "", 2.0).unwrap_err(),
        ValidationError::MissingFuel
    );
    assert_eq!(
        calculate_savings(&fuels, &models, "coal", 2.0).unwrap_err(),
        ValidationError::UnknownFuel("coal".to_string())
    );
}

#[test]
fn rejected_input_leaves_catalog_untouched() {
    let fuels = priced_catalog();
    let models = ModelCatalog::builtin();
    let before = fuels.clone();
    let _ = calculate_savings(&fuels, &models, "", 0.0);
    let _ = calculate_savings(&fuels, &models, "coal", 3.0);
    let _ = calculate_savings(&fuels, &models, "lpg", -2.0);
    assert_eq!(fuels, before);
}
