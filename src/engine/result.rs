//! Validation outcome types

use serde::{Deserialize, Serialize};

use crate::table::Row;

/// One unsatisfied check on one record's field.
///
/// A record can fail on several fields, and a field can fail several checks;
/// every failure is retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    /// 0-based position of the record in the input sequence.
    pub row_index: usize,
    /// Schema field the failure is attributed to.
    pub field: String,
    /// The failed check's error label (or a coercion/nullability label).
    pub label: String,
    /// The offending raw value, when one was present.
    pub value: Option<String>,
}

/// The outcome of one full validation pass.
///
/// Partition invariant: `valid_records` holds exactly the rows whose index
/// appears in no failure, in original input order. Every input row is in
/// exactly one of the two sets. Constructed once, never mutated after.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub valid_records: Vec<Row>,
    pub failures: Vec<Failure>,
}

impl ValidationResult {
    /// True when every record passed every check.
    pub fn is_fully_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of distinct records with at least one failure.
    pub fn invalid_record_count(&self) -> usize {
        let mut rows: Vec<usize> = self.failures.iter().map(|f| f.row_index).collect();
        rows.sort_unstable();
        rows.dedup();
        rows.len()
    }
}
