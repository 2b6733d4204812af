//! CSV export service
//!
//! Serializes a filtered record set to delimited text. Two variants: the
//! base export (`Name,Species,Health,CO2_kg,Address`) and the expanded
//! export adding `Age,YearlyTonnes,Size,TenYearTonnes`. Field values are
//! taken verbatim from the record; fields containing commas are quoted.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::TreeRecord;

const BASE_HEADER: [&str; 5] = ["Name", "Species", "Health", "CO2_kg", "Address"];
const EXPANDED_HEADER: [&str; 9] = [
    "Name",
    "Species",
    "Health",
    "CO2_kg",
    "Address",
    "Age",
    "YearlyTonnes",
    "Size",
    "TenYearTonnes",
];

/// Base export row.
#[derive(Debug)]
pub struct CsvRow {
    pub name: String,
    pub species: String,
    pub health: String,
    pub co2_kg: String,
    pub address: String,
}

impl From<&TreeRecord> for CsvRow {
    fn from(r: &TreeRecord) -> Self {
        Self {
            name: r.name.clone(),
            species: r.species.to_string(),
            health: r.health.to_string(),
            co2_kg: fmt_num(r.co2_absorption_kg),
            address: r.address.clone(),
        }
    }
}

/// Expanded export row: base columns plus age, tonne figures and size class.
#[derive(Debug)]
pub struct ExpandedCsvRow {
    pub base: CsvRow,
    pub age: u32,
    pub yearly_tonnes: String,
    pub size: String,
    pub ten_year_tonnes: String,
}

impl ExpandedCsvRow {
    /// Expand one record. Age is not part of the inventory and is drawn
    /// from the rng (5..=84 years).
    pub fn from_record(record: &TreeRecord, rng: &mut impl Rng) -> Self {
        let yearly = round3(record.co2_absorption_kg / 1000.0);
        Self {
            base: CsvRow::from(record),
            age: rng.gen_range(5..85),
            yearly_tonnes: fmt_num(yearly),
            size: record.species.size_class().to_string(),
            ten_year_tonnes: fmt_num(round3(yearly * 10.0)),
        }
    }
}

/// Service writing filtered record sets to CSV files.
#[derive(Debug, Clone, Default)]
pub struct ExportService {
    /// Seed for the expanded export's age column; None picks a random seed
    seed: Option<u64>,
}

impl ExportService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Write the base CSV variant. The header line is written even when
    /// the record set is empty.
    pub fn write_csv(&self, path: &Path, records: &[TreeRecord]) -> ApplicationResult<usize> {
        debug!("exporting {} records to {}", records.len(), path.display());
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(|e| export_err(path, e))?;
        writer
            .write_record(BASE_HEADER)
            .map_err(|e| export_err(path, e))?;
        for record in records {
            let row = CsvRow::from(record);
            writer
                .write_record([
                    row.name.as_str(),
                    row.species.as_str(),
                    row.health.as_str(),
                    row.co2_kg.as_str(),
                    row.address.as_str(),
                ])
                .map_err(|e| export_err(path, e))?;
        }
        writer.flush().map_err(|e| ApplicationError::Export {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(records.len())
    }

    /// Write the expanded CSV variant.
    pub fn write_expanded_csv(
        &self,
        path: &Path,
        records: &[TreeRecord],
    ) -> ApplicationResult<usize> {
        debug!(
            "exporting {} expanded records to {}",
            records.len(),
            path.display()
        );
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(|e| export_err(path, e))?;
        writer
            .write_record(EXPANDED_HEADER)
            .map_err(|e| export_err(path, e))?;

        for record in records {
            let row = ExpandedCsvRow::from_record(record, &mut rng);
            let age = row.age.to_string();
            writer
                .write_record([
                    row.base.name.as_str(),
                    row.base.species.as_str(),
                    row.base.health.as_str(),
                    row.base.co2_kg.as_str(),
                    row.base.address.as_str(),
                    age.as_str(),
                    row.yearly_tonnes.as_str(),
                    row.size.as_str(),
                    row.ten_year_tonnes.as_str(),
                ])
                .map_err(|e| export_err(path, e))?;
        }
        writer.flush().map_err(|e| ApplicationError::Export {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(records.len())
    }
}

/// Round to three decimal places (tonne figures in the expanded export).
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Format a number the way the dashboard displays it: no trailing ".0".
fn fmt_num(value: f64) -> String {
    format!("{value}")
}

fn export_err(path: &Path, e: csv::Error) -> ApplicationError {
    ApplicationError::Export {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}
