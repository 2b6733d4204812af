//! Tests for DashboardService

use std::sync::Arc;

use treedash::application::DashboardService;
use treedash::domain::{
    Coordinates, District, FilterCriteria, Health, Species, TreeRecord,
    DEFAULT_FALLBACK_ABSORPTION_TONNES,
};
use treedash::infrastructure::StaticSource;

fn tree(id: u32, species: Species, health: Health, kg: f64, district: District) -> TreeRecord {
    let (lat, lon) = district.center();
    TreeRecord {
        id,
        name: format!("{species} Tree #{id}"),
        species,
        health,
        co2_absorption_kg: kg,
        district,
        address: format!("{} {}, {}", district.streets()[0], id, district),
        coordinates: Coordinates { lat, lon },
    }
}

fn dashboard_with(records: Vec<TreeRecord>) -> DashboardService {
    treedash::util::testing::init_test_setup();
    let source = Arc::new(StaticSource { records });
    DashboardService::from_source(source, DEFAULT_FALLBACK_ABSORPTION_TONNES)
        .expect("load dashboard")
}

#[test]
fn given_health_filter_when_evaluating_then_aggregates_exclude_other_healths() {
    let dashboard = dashboard_with(vec![
        tree(1, Species::Oak, Health::Poor, 40.0, District::I),
        tree(2, Species::Pine, Health::Good, 50.0, District::II),
        tree(3, Species::Maple, Health::Poor, 30.0, District::III),
    ]);
    let criteria = FilterCriteria {
        health: Some(Health::Poor),
        ..Default::default()
    };

    let view = dashboard.evaluate(&criteria);

    assert!(view.filtered.iter().all(|r| r.health == Health::Poor));
    // Pine (the Good record) must not leak into the aggregates
    assert!(view
        .species_distribution
        .iter()
        .all(|e| e.species != Species::Pine));
    assert!(view
        .district_co2_totals
        .iter()
        .all(|e| e.district != District::II));
}

#[test]
fn given_criteria_change_when_evaluating_then_view_is_replaced_not_mutated() {
    let dashboard = dashboard_with(vec![
        tree(1, Species::Oak, Health::Good, 40.0, District::I),
        tree(2, Species::Pine, Health::Poor, 50.0, District::II),
    ]);

    let all = dashboard.evaluate(&FilterCriteria::default());
    let poor_only = dashboard.evaluate(&FilterCriteria {
        health: Some(Health::Poor),
        ..Default::default()
    });

    // Source collection untouched by either evaluation
    assert_eq!(dashboard.records().len(), 2);
    assert_eq!(all.filtered.len(), 2);
    assert_eq!(poor_only.filtered.len(), 1);
}

#[test]
fn given_district_filter_when_evaluating_then_single_district_total_remains() {
    let dashboard = dashboard_with(vec![
        tree(1, Species::Oak, Health::Good, 40.0, District::V),
        tree(2, Species::Pine, Health::Good, 50.0, District::V),
        tree(3, Species::Maple, Health::Good, 30.0, District::VI),
    ]);
    let criteria = FilterCriteria {
        district: Some(District::V),
        ..Default::default()
    };

    let view = dashboard.evaluate(&criteria);

    assert_eq!(view.district_co2_totals.len(), 1);
    assert_eq!(view.district_co2_totals[0].district, District::V);
    assert_eq!(view.district_co2_totals[0].total_kg, 90.0);
}

#[test]
fn given_view_when_ranking_top_districts_then_descending_truncated() {
    let dashboard = dashboard_with(vec![
        tree(1, Species::Oak, Health::Good, 10.0, District::I),
        tree(2, Species::Pine, Health::Good, 90.0, District::II),
        tree(3, Species::Maple, Health::Good, 50.0, District::III),
    ]);

    let view = dashboard.evaluate(&FilterCriteria::default());
    let top = dashboard.top_districts(&view, 2);

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].district, District::II);
    assert_eq!(top[1].district, District::III);
}

#[test]
fn given_goal_over_filtered_view_when_estimating_then_uses_filtered_mean() {
    let dashboard = dashboard_with(vec![
        tree(1, Species::Oak, Health::Poor, 40.0, District::I),
        tree(2, Species::Pine, Health::Poor, 60.0, District::II),
        tree(3, Species::Maple, Health::Good, 500.0, District::III),
    ]);
    let view = dashboard.evaluate(&FilterCriteria {
        health: Some(Health::Poor),
        ..Default::default()
    });

    // Poor trees only: mean 50 kg = 0.05 t, ceil(1 / 0.05) = 20
    let estimate = dashboard.estimate_goal("1", &view).expect("estimate");

    assert_eq!(estimate.required_trees, 20);
}

#[test]
fn given_invalid_goal_when_estimating_then_service_yields_none() {
    let dashboard = dashboard_with(vec![]);
    let view = dashboard.evaluate(&FilterCriteria::default());

    assert!(dashboard.estimate_goal("not a number", &view).is_none());
    assert!(dashboard.estimate_goal("-2", &view).is_none());
}
