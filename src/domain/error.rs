//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid record construction.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("unknown species: {0}")]
    UnknownSpecies(String),

    #[error("unknown health value: {0}")]
    UnknownHealth(String),

    #[error("unknown district: {0}")]
    UnknownDistrict(String),

    #[error("record {id} has non-positive CO2 absorption: {value}")]
    InvalidAbsorption { id: u32, value: f64 },

    #[error("record {0} has an empty name")]
    EmptyName(u32),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
