//! Tests for record sources

use std::path::PathBuf;

use tempfile::TempDir;

use treedash::domain::District;
use treedash::infrastructure::{JsonFileSource, RecordSource, SyntheticSource};

/// Helper to create a temp JSON inventory file
fn create_json_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    treedash::util::testing::init_test_setup();
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write json file");
    path
}

#[test]
fn given_requested_count_when_generating_then_that_many_records_result() {
    let source = SyntheticSource::new(100, Some(7));

    let records = source.load().unwrap();

    assert_eq!(records.len(), 100);
}

#[test]
fn given_same_seed_when_generating_twice_then_inventories_are_identical() {
    let a = SyntheticSource::new(50, Some(42)).load().unwrap();
    let b = SyntheticSource::new(50, Some(42)).load().unwrap();

    assert_eq!(a, b);
}

#[test]
fn given_different_seeds_when_generating_then_inventories_differ() {
    let a = SyntheticSource::new(50, Some(1)).load().unwrap();
    let b = SyntheticSource::new(50, Some(2)).load().unwrap();

    assert_ne!(a, b);
}

#[test]
fn given_generated_records_then_fields_stay_within_model_bounds() {
    let records = SyntheticSource::new(200, Some(3)).load().unwrap();

    for record in &records {
        assert!(record.co2_absorption_kg >= 10.0 && record.co2_absorption_kg < 60.0);
        assert_eq!(record.co2_absorption_kg.fract(), 0.0);
        assert!(record.validate().is_ok());
        // Address carries the district label, which street search relies on
        assert!(record.address.ends_with(&record.district.to_string()));
        // Coordinates jitter at most 0.005 degrees off the district center
        let (lat, lon) = record.district.center();
        assert!((record.coordinates.lat - lat).abs() <= 0.005);
        assert!((record.coordinates.lon - lon).abs() <= 0.005);
    }
}

#[test]
fn given_generated_records_then_ids_are_sequential_from_one() {
    let records = SyntheticSource::new(10, Some(9)).load().unwrap();

    let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
    assert_eq!(records[0].name, format!("{} Tree #1", records[0].species));
}

#[test]
fn given_valid_json_when_loading_then_records_parse() {
    let temp = TempDir::new().unwrap();
    let path = create_json_file(
        &temp,
        "trees.json",
        r#"[
          {
            "id": 1,
            "name": "Oak Tree #1",
            "species": "Oak",
            "health": "Good",
            "co2_absorption_kg": 42.0,
            "district": "V. Ker.",
            "address": "Váci utca 12, V. Ker.",
            "coordinates": { "lat": 47.495, "lon": 19.055 }
          }
        ]"#,
    );

    let records = JsonFileSource::new(path).load().unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].district, District::V);
}

#[test]
fn given_unknown_district_in_json_when_loading_then_errors_at_ingestion() {
    let temp = TempDir::new().unwrap();
    let path = create_json_file(
        &temp,
        "bad.json",
        r#"[
          {
            "id": 1,
            "name": "Oak Tree #1",
            "species": "Oak",
            "health": "Good",
            "co2_absorption_kg": 42.0,
            "district": "XXIV. Ker.",
            "address": "Sehol utca 1, XXIV. Ker.",
            "coordinates": { "lat": 47.5, "lon": 19.0 }
          }
        ]"#,
    );

    assert!(JsonFileSource::new(path).load().is_err());
}

#[test]
fn given_non_positive_absorption_in_json_when_loading_then_rejected() {
    let temp = TempDir::new().unwrap();
    let path = create_json_file(
        &temp,
        "zero.json",
        r#"[
          {
            "id": 1,
            "name": "Oak Tree #1",
            "species": "Oak",
            "health": "Good",
            "co2_absorption_kg": 0.0,
            "district": "I. Ker.",
            "address": "Úri utca 1, I. Ker.",
            "coordinates": { "lat": 47.5, "lon": 19.0 }
          }
        ]"#,
    );

    assert!(JsonFileSource::new(path).load().is_err());
}

#[test]
fn given_missing_file_when_loading_then_io_error_with_context() {
    let result = JsonFileSource::new("/nonexistent/trees.json").load();

    let err = result.unwrap_err();
    assert!(err.to_string().contains("/nonexistent/trees.json"));
}
