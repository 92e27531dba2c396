//! The validation engine
//!
//! Validation semantics:
//! - Every schema-declared column must exist in the batch; a missing column
//!   aborts the run with no partial result.
//! - Evaluation is exhaustive: every record, every field, every check runs,
//!   accumulating failures. No early return on the first failing check,
//!   field, or record.
//! - Coercion misses and missing required values are record-level failures,
//!   not errors.
//! - The engine borrows the batch read-only and never mutates records.
//! - Validation is deterministic: failure order is row order, then field
//!   declaration order, then check order.

use std::collections::HashSet;

use crate::schema::{coerce, FieldRule, Schema};
use crate::table::{Batch, Cell};

use super::errors::{EngineError, EngineResult};
use super::result::{Failure, ValidationResult};

/// Label reported when a non-nullable field has no value.
const REQUIRED_LABEL: &str = "value is required";

/// Runs the schema against a full batch and partitions it.
pub fn validate(schema: &Schema, batch: &Batch) -> EngineResult<ValidationResult> {
    // Resolve every schema column up front so a structural problem surfaces
    // before any record work.
    let mut column_indices = Vec::with_capacity(schema.fields().len());
    for rule in schema.fields() {
        let index = batch
            .column_index(&rule.name)
            .ok_or_else(|| EngineError::MissingColumn {
                field: rule.name.clone(),
            })?;
        column_indices.push(index);
    }

    let mut failures = Vec::new();
    for (row_index, row) in batch.rows.iter().enumerate() {
        for (rule, &column) in schema.fields().iter().zip(&column_indices) {
            validate_cell(row_index, rule, &row.cells[column], &mut failures);
        }
    }

    let failing_rows: HashSet<usize> = failures.iter().map(|f| f.row_index).collect();
    let valid_records = batch
        .rows
        .iter()
        .enumerate()
        .filter(|(index, _)| !failing_rows.contains(index))
        .map(|(_, row)| row.clone())
        .collect();

    Ok(ValidationResult {
        valid_records,
        failures,
    })
}

/// Evaluates one field of one record, appending any failures.
fn validate_cell(row_index: usize, rule: &FieldRule, cell: &Cell, failures: &mut Vec<Failure>) {
    if cell.is_missing() {
        if !rule.nullable {
            failures.push(Failure {
                row_index,
                field: rule.name.clone(),
                label: REQUIRED_LABEL.to_string(),
                value: None,
            });
        }
        // A nullable field with no value has nothing left to check.
        return;
    }

    let value = match coerce(cell, rule.field_type) {
        Ok(value) => value,
        Err(err) => {
            // Without a typed value the field's checks cannot run; the rest
            // of the record is still evaluated.
            failures.push(Failure {
                row_index,
                field: rule.name.clone(),
                label: err.label(),
                value: cell.render(),
            });
            return;
        }
    };

    for check in &rule.checks {
        if !check.kind.evaluate(&value) {
            failures.push(Failure {
                row_index,
                field: rule.name.clone(),
                label: check.label.clone(),
                value: cell.render(),
            });
        }
    }
}
