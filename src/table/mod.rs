//! Tabular data model shared by sources, the validation engine, and sinks.
//!
//! A `Batch` is an ordered column list plus rows; every row carries exactly
//! one `Cell` per column. Cells are raw values as read from the source: a
//! CSV source only produces `Missing` and `Text`, while richer sources may
//! feed typed cells directly. Typed interpretation happens later, during
//! schema coercion.

use serde::{Deserialize, Serialize};

/// One raw input value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Cell {
    /// No value present (blank cell).
    Missing,
    /// UTF-8 text.
    Text(String),
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit floating point.
    Float(f64),
}

impl Cell {
    /// Builds a text cell, mapping the empty string to `Missing`.
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            Cell::Missing
        } else {
            Cell::Text(raw.to_string())
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Renders the cell for diagnostics and output. `Missing` has no
    /// rendering.
    pub fn render(&self) -> Option<String> {
        match self {
            Cell::Missing => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Integer(i) => Some(i.to_string()),
            Cell::Float(f) => Some(f.to_string()),
        }
    }
}

/// One input row: cells parallel to the batch's column list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

/// An in-memory table: ordered columns plus rows.
///
/// Invariant: every row has exactly `columns.len()` cells. Sources enforce
/// this at read time; a violation there is a fatal malformed-input error,
/// never a per-record failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Column names in input order.
    pub columns: Vec<String>,
    /// Rows in input order. A row's position is its identity (`row_index`).
    pub rows: Vec<Row>,
}

impl Batch {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Position of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
