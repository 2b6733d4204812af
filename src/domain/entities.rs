//! Domain entities: core data structures

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{District, Health, Species};
use crate::domain::error::{DomainError, DomainResult};

/// Geographic position of a tree, within plausible bounds of the modeled city.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One tree in the inventory. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeRecord {
    /// Unique positive identifier, stable within a session
    pub id: u32,
    /// Display label, e.g. "Oak Tree #17"
    pub name: String,
    pub species: Species,
    pub health: Health,
    /// Kilograms of CO2 absorbed per year
    pub co2_absorption_kg: f64,
    pub district: District,
    /// Street and district label, e.g. "Váci utca 12, V. Ker."
    pub address: String,
    pub coordinates: Coordinates,
}

impl TreeRecord {
    /// Ingestion-time validation: enums are already closed by construction,
    /// so only the numeric and textual fields remain to check.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyName(self.id));
        }
        if !(self.co2_absorption_kg > 0.0) {
            return Err(DomainError::InvalidAbsorption {
                id: self.id,
                value: self.co2_absorption_kg,
            });
        }
        Ok(())
    }
}

/// User-chosen constraints narrowing the visible record set.
///
/// `None` / empty string mean "All" (no constraint).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub health: Option<Health>,
    pub district: Option<District>,
    /// Case-insensitive substring matched against the address
    pub street_query: String,
}

impl FilterCriteria {
    /// Whether a record passes all three predicates.
    pub fn matches(&self, record: &TreeRecord) -> bool {
        let health_ok = self.health.map_or(true, |h| record.health == h);
        let district_ok = self.district.map_or(true, |d| record.district == d);
        let street_ok = self.street_query.is_empty()
            || record
                .address
                .to_lowercase()
                .contains(&self.street_query.to_lowercase());
        health_ok && district_ok && street_ok
    }
}

/// Count of one species in the filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpeciesCount {
    pub species: Species,
    pub count: usize,
}

/// CO2 total for one district over the filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistrictTotal {
    pub district: District,
    pub total_kg: f64,
}
