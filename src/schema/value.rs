//! Typed field extraction
//!
//! Raw cells are loosely typed; the schema declares what each field should
//! be. Coercion turns a cell into a typed `FieldValue` or reports why it
//! cannot, as a returned value rather than a panic or a fatal error. The
//! engine maps coercion misses into record-level failures.

use crate::table::Cell;

use super::types::FieldType;

/// A cell successfully coerced to its declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// A failed coercion: the declared type the cell could not be read as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionError {
    expected: FieldType,
}

impl CoercionError {
    pub fn new(expected: FieldType) -> Self {
        Self { expected }
    }

    /// The error label reported on the failing field.
    pub fn label(&self) -> String {
        format!("expected {}", self.expected.type_name())
    }
}

/// Coerces a non-missing cell to the declared field type.
///
/// - `Text`: numeric cells are rendered to their text form.
/// - `Integer`: text is trimmed and parsed; floats are accepted only when
///   fraction-free and within `i64` range.
/// - `Float`: text is trimmed and parsed; integers widen losslessly.
///
/// Missing cells are the caller's concern (nullability), not coercion's.
pub fn coerce(cell: &Cell, expected: FieldType) -> Result<FieldValue, CoercionError> {
    match expected {
        FieldType::Text => match cell {
            Cell::Text(s) => Ok(FieldValue::Text(s.clone())),
            Cell::Integer(i) => Ok(FieldValue::Text(i.to_string())),
            Cell::Float(f) => Ok(FieldValue::Text(f.to_string())),
            Cell::Missing => Err(CoercionError::new(expected)),
        },
        FieldType::Integer => match cell {
            Cell::Integer(i) => Ok(FieldValue::Integer(*i)),
            Cell::Text(s) => s
                .trim()
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|_| CoercionError::new(expected)),
            Cell::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Ok(FieldValue::Integer(*f as i64))
                } else {
                    Err(CoercionError::new(expected))
                }
            }
            Cell::Missing => Err(CoercionError::new(expected)),
        },
        FieldType::Float => match cell {
            Cell::Float(f) => Ok(FieldValue::Float(*f)),
            Cell::Integer(i) => Ok(FieldValue::Float(*i as f64)),
            Cell::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(FieldValue::Float)
                .map_err(|_| CoercionError::new(expected)),
            Cell::Missing => Err(CoercionError::new(expected)),
        },
    }
}
