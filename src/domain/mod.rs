//! Domain layer: entities and the derivation engine
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod catalog;
pub mod derive;
pub mod entities;
pub mod error;

pub use catalog::{District, Health, SizeClass, Species};
pub use derive::{
    district_co2_totals, estimate_required_trees, filter_records, species_distribution,
    top_districts, DerivedView, GoalEstimate, DEFAULT_FALLBACK_ABSORPTION_TONNES,
};
pub use entities::{Coordinates, DistrictTotal, FilterCriteria, SpeciesCount, TreeRecord};
pub use error::{DomainError, DomainResult};
