//! Record source boundary
//!
//! `RecordSource` abstracts where the inventory comes from, allowing
//! services and tests to swap the synthetic generator for fixed fixtures
//! or a file-backed feed.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::domain::{Coordinates, District, Health, Species, TreeRecord};
use crate::infrastructure::error::{InfraError, InfraResult};

/// Supplies the initial collection of tree records.
pub trait RecordSource: Send + Sync {
    /// Load all records. Records are immutable after this point.
    fn load(&self) -> InfraResult<Vec<TreeRecord>>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Synthetic inventory generator.
///
/// Uniform random district, species and health; street drawn from the
/// district's street list; absorption is a whole number of kilograms in
/// 10..=59; coordinates are the district center jittered by up to ±0.005°.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    /// Number of records to generate
    pub count: usize,
    /// Seed for reproducible inventories; None picks a random seed
    pub seed: Option<u64>,
}

impl SyntheticSource {
    pub fn new(count: usize, seed: Option<u64>) -> Self {
        Self { count, seed }
    }
}

impl RecordSource for SyntheticSource {
    fn load(&self) -> InfraResult<Vec<TreeRecord>> {
        debug!("generating {} synthetic records, seed={:?}", self.count, self.seed);
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let records = (0..self.count)
            .map(|i| {
                let id = i as u32 + 1;
                let district = District::ALL[rng.gen_range(0..District::ALL.len())];
                let species = Species::ALL[rng.gen_range(0..Species::ALL.len())];
                let health = match rng.gen_range(0..3) {
                    0 => Health::Good,
                    1 => Health::Moderate,
                    _ => Health::Poor,
                };
                let streets = district.streets();
                let street = streets[rng.gen_range(0..streets.len())];
                let (lat, lon) = district.center();

                TreeRecord {
                    id,
                    name: format!("{species} Tree #{id}"),
                    species,
                    health,
                    co2_absorption_kg: rng.gen_range(10..60) as f64,
                    district,
                    address: format!("{street} {}, {district}", rng.gen_range(0..100)),
                    coordinates: Coordinates {
                        lat: lat + (rng.gen::<f64>() - 0.5) * 0.01,
                        lon: lon + (rng.gen::<f64>() - 0.5) * 0.01,
                    },
                }
            })
            .collect();

        Ok(records)
    }
}

/// File-backed source reading a JSON array of records.
///
/// Closed enums make invalid species/health/district values a
/// deserialization error; remaining field checks run via
/// `TreeRecord::validate` so malformed data is rejected at ingestion,
/// never inside the derivation functions.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    pub path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> InfraResult<Vec<TreeRecord>> {
        debug!("loading records from {}", self.path.display());
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| InfraError::io(format!("read {}", self.path.display()), e))?;

        let records: Vec<TreeRecord> =
            serde_json::from_str(&content).map_err(|e| InfraError::InvalidData {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        for record in &records {
            record.validate()?;
        }

        debug!("loaded {} records", records.len());
        Ok(records)
    }
}

/// Fixed in-memory source, mainly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pub records: Vec<TreeRecord>,
}

impl RecordSource for StaticSource {
    fn load(&self) -> InfraResult<Vec<TreeRecord>> {
        Ok(self.records.clone())
    }
}
