//! Tests for ExportService

use std::path::Path;

use tempfile::TempDir;

use treedash::application::services::round3;
use treedash::application::ExportService;
use treedash::domain::{Coordinates, District, Health, Species, TreeRecord};

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

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("read csv")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn given_filtered_records_when_exporting_then_base_header_and_rows_match() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tree-results.csv");
    let records = vec![
        tree(1, Species::Oak, Health::Poor, 42.0, District::V),
        tree(2, Species::Birch, Health::Poor, 15.0, District::I),
    ];

    let written = ExportService::new().write_csv(&path, &records).unwrap();

    assert_eq!(written, 2);
    let lines = read_lines(&path);
    assert_eq!(lines[0], "Name,Species,Health,CO2_kg,Address");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("Oak Tree #1,Oak,Poor,42,"));
}

#[test]
fn given_address_with_comma_when_exporting_then_field_is_quoted() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("quoted.csv");
    let records = vec![tree(1, Species::Oak, Health::Good, 42.0, District::V)];

    ExportService::new().write_csv(&path, &records).unwrap();

    // "Váci utca 1, V. Ker." contains a comma and must be one CSV field
    let lines = read_lines(&path);
    assert!(lines[1].contains("\"Váci utca 1, V. Ker.\""));

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let record = reader.records().next().unwrap().unwrap();
    assert_eq!(record.len(), 5);
    assert_eq!(&record[4], "Váci utca 1, V. Ker.");
}

#[test]
fn given_empty_filtered_set_when_exporting_then_header_alone_is_written() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.csv");

    let written = ExportService::new().write_csv(&path, &[]).unwrap();

    assert_eq!(written, 0);
    // The header line is part of the file contract even with no rows
    let lines = read_lines(&path);
    assert_eq!(lines, vec!["Name,Species,Health,CO2_kg,Address"]);
}

#[test]
fn given_empty_filtered_set_when_exporting_expanded_then_header_alone_is_written() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty-expanded.csv");

    let written = ExportService::new().write_expanded_csv(&path, &[]).unwrap();

    assert_eq!(written, 0);
    let lines = read_lines(&path);
    assert_eq!(
        lines,
        vec!["Name,Species,Health,CO2_kg,Address,Age,YearlyTonnes,Size,TenYearTonnes"]
    );
}

#[test]
fn given_expanded_export_then_header_gains_the_four_extra_columns() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("expanded.csv");
    let records = vec![tree(1, Species::Oak, Health::Good, 42.0, District::V)];

    ExportService::with_seed(11)
        .write_expanded_csv(&path, &records)
        .unwrap();

    let lines = read_lines(&path);
    assert_eq!(
        lines[0],
        "Name,Species,Health,CO2_kg,Address,Age,YearlyTonnes,Size,TenYearTonnes"
    );
    assert_eq!(lines.len(), 2);
}

#[test]
fn given_expanded_export_then_derived_columns_follow_the_rules() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("expanded.csv");
    let records = vec![
        tree(1, Species::Oak, Health::Good, 42.0, District::V),
        tree(2, Species::Maple, Health::Good, 50.0, District::VI),
        tree(3, Species::Chestnut, Health::Good, 33.0, District::VII),
    ];

    ExportService::with_seed(11)
        .write_expanded_csv(&path, &records)
        .unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

    // Size: Oak -> Large, Maple -> Small, Chestnut -> Medium
    assert_eq!(&rows[0][7], "Large");
    assert_eq!(&rows[1][7], "Small");
    assert_eq!(&rows[2][7], "Medium");

    // YearlyTonnes = kg/1000 to three decimals, TenYearTonnes = yearly * 10
    assert_eq!(&rows[0][6], "0.042");
    assert_eq!(&rows[0][8], "0.42");
    assert_eq!(&rows[1][6], "0.05");
    assert_eq!(&rows[1][8], "0.5");

    // Age stays within 5..=84
    for row in &rows {
        let age: u32 = row[5].parse().unwrap();
        assert!((5..=84).contains(&age));
    }
}

#[test]
fn given_same_seed_when_exporting_expanded_twice_then_files_are_identical() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("a.csv");
    let second = temp.path().join("b.csv");
    let records = vec![tree(1, Species::Oak, Health::Good, 42.0, District::V)];

    ExportService::with_seed(5)
        .write_expanded_csv(&first, &records)
        .unwrap();
    ExportService::with_seed(5)
        .write_expanded_csv(&second, &records)
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(first).unwrap(),
        std::fs::read_to_string(second).unwrap()
    );
}

#[test]
fn round3_rounds_to_three_decimals() {
    assert_eq!(round3(0.0416), 0.042);
    assert_eq!(round3(0.05), 0.05);
    assert_eq!(round3(1.0 / 3.0), 0.333);
}
