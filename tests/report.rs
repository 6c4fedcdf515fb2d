//! 표시 필드 변환 테스트.
use pellet_savings::fuel::CostTable;
use pellet_savings::report::{format_thousands, ResultView, NO_MODEL_LABEL, PLACEHOLDER};
use pellet_savings::session::{clamp_usage, CostState, Session};

fn priced_session() -> Session {
    let mut session = Session::new("RS");
    let table: CostTable = [("lpg", 50.0), ("pellet", 10.0)].into_iter().collect();
    session.apply_costs(&table);
    session
}

#[test]
fn lpg_scenario_view() {
    let view = priced_session().evaluate("lpg", 2.0).expect("view");
    assert_eq!(view.fuel_name, "LPG");
    assert_eq!(view.calorific_value, "12000 CV");
    assert_eq!(view.fuel_consumption, "2 KG/HR");
    assert_eq!(view.pellet_consumption, "5.85 KG/HR");
    assert_eq!(view.burner_model, "IB-150 ( 150,000 KCAL/HR )");
    assert_eq!(view.hourly_saving, "41.46 RS");
    assert_eq!(view.monthly_saving, "29853.66 RS");
    assert_eq!(view.yearly_saving, "363219.51 RS");
    assert_eq!(view.fuel_cost, "50 RS");
    assert_eq!(view.pellet_cost, "10 RS");
}

#[test]
fn large_demand_shows_capacity_with_separators() {
    // 125 * 12000 = 1,500,000 kcal/h
    let view = priced_session().evaluate("lpg", 125.0).expect("view");
    assert_eq!(view.burner_model, "IB-1600 ( 1,600,000 KCAL/HR )");

    let view = priced_session().evaluate("lpg", 500.0).expect("view");
    assert_eq!(view.burner_model, NO_MODEL_LABEL);
}

#[test]
fn reset_view_is_all_placeholders() {
    let view = ResultView::reset();
    assert!(view.rows().iter().all(|(_, value)| *value == PLACEHOLDER));
    assert_eq!(ResultView::default(), view);
}

#[test]
fn invalid_input_produces_no_view() {
    let session = priced_session();
    assert!(session.evaluate("", 2.0).is_err());
    assert!(session.evaluate("lpg", 0.0).is_err());
    assert!(session.evaluate("lpg", clamp_usage(-4.0)).is_err());
}

#[test]
fn session_tracks_cost_state() {
    let mut session = Session::new("RS");
    assert_eq!(session.cost_state(), CostState::Pending);
    session.mark_costs_unavailable();
    assert_eq!(session.cost_state(), CostState::Unavailable);
    assert_eq!(priced_session().cost_state(), CostState::Loaded { updated: 2 });
}

#[test]
fn thousands_separator() {
    assert_eq!(format_thousands(0.0), "0");
    assert_eq!(format_thousands(999.0), "999");
    assert_eq!(format_thousands(1_000.0), "1,000");
    assert_eq!(format_thousands(150_000.0), "150,000");
    assert_eq!(format_thousands(2_000_000.0), "2,000,000");
    assert_eq!(format_thousands(-12_345.6), "-12,346");
}
