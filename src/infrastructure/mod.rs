//! Infrastructure layer: record source implementations

pub mod error;
pub mod traits;

pub use error::{InfraError, InfraResult};
pub use traits::{JsonFileSource, RecordSource, StaticSource, SyntheticSource};
