//! treedash: urban tree inventory explorer
//!
//! The core is the derivation engine in [`domain::derive`]: pure functions
//! turning a record set plus filter/goal inputs into a filtered subset, a
//! species distribution, per-district CO2 totals, and a required-tree-count
//! estimate. Around it: a record source boundary (synthetic generator or
//! JSON file), a CSV export service, and a clap CLI.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use config::Settings;
pub use domain::{
    DerivedView, District, FilterCriteria, GoalEstimate, Health, Species, TreeRecord,
};
