//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on the record source boundary but are themselves
//! concrete structs, not traits.

mod dashboard;
mod export;

pub use dashboard::DashboardService;
pub use export::{round3, CsvRow, ExpandedCsvRow, ExportService};
