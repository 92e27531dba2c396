//! Engine error types
//!
//! Only structural problems abort a run. Anything about an individual
//! record's content is a collected `Failure`, never an error here.

use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Fatal, run-aborting engine errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A schema-declared field is absent from the input's column set.
    #[error("schema field '{field}' is missing from the input columns")]
    MissingColumn { field: String },
}
