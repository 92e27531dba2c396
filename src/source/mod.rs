//! Tabular input/output boundary
//!
//! The engine is pure; everything that touches files lives behind these two
//! traits. The bundled implementation is a strict CSV codec, but any source
//! that can produce a `Batch` (and any sink that can persist one) plugs in
//! here.

mod csv;
mod errors;

pub use csv::{CsvReader, CsvWriter};
pub use errors::{SourceError, SourceResult};

use crate::table::{Batch, Row};

/// Supplies an ordered batch of records with named columns.
///
/// Reader failures are fatal and distinct from per-record validation
/// failures.
pub trait RecordSource {
    fn read_batch(&self) -> SourceResult<Batch>;
}

/// Persists an ordered set of records under the given columns.
pub trait RecordSink {
    fn write_batch(&self, columns: &[String], rows: &[Row]) -> SourceResult<()>;
}
