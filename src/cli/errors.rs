//! CLI-specific error types
//!
//! Everything surfacing here aborts the run: the process prints one
//! diagnostic and exits non-zero, having written no artifacts.

use std::io;

use thiserror::Error;

use crate::engine::EngineError;
use crate::source::SourceError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// Fatal CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input could not be read or was not well-formed tabular data.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The input's structure does not satisfy the schema.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The error report could not be persisted.
    #[error("cannot write report '{path}': {source}")]
    ReportWrite {
        path: String,
        #[source]
        source: io::Error,
    },
}
