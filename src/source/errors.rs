//! Source and sink error types
//!
//! Everything here is fatal: a source that cannot produce a well-formed
//! batch aborts the run. Per-record content problems never originate here.

use std::io;

use thiserror::Error;

/// Result type for source and sink operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Fatal tabular input/output errors.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The input file could not be read at all.
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The output file could not be written.
    #[error("cannot write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The input has no header row.
    #[error("'{path}' is empty; a header row is required")]
    EmptyInput { path: String },

    /// A data row's field count does not match the header.
    #[error("'{path}' line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        path: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A quoted field is never closed.
    #[error("'{path}': unterminated quoted field starting at line {line}")]
    UnterminatedQuote { path: String, line: usize },
}
