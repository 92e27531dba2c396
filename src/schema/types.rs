//! Declarative schema definitions
//!
//! A schema is data, not code: an ordered list of field rules, each carrying
//! the field's type, nullability, and an ordered list of checks. A check is
//! a tagged kind plus an error label, with no embedded closures, so a schema
//! can be serialized and each check tested in isolation.

use serde::{Deserialize, Serialize};

/// Declared field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 text
    Text,
    /// 64-bit signed integer
    Integer,
    /// 64-bit floating point
    Float,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Integer => "integer",
            FieldType::Float => "decimal",
        }
    }
}

/// The predicate a check applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckKind {
    /// Text length in characters must lie within `[min, max]`.
    LengthRange { min: usize, max: usize },
    /// Numeric value must be `>= bound`.
    MinFloat { bound: f64 },
    /// Integer value must be `>= bound`.
    MinInt { bound: i64 },
    /// Integer value must be `<= bound`.
    MaxInt { bound: i64 },
    /// Text must be a valid national tax ID.
    TaxId,
    /// Text must be a well-formed email address.
    Email,
}

/// One declarative check: a predicate kind plus the label reported when the
/// predicate is not satisfied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Check {
    pub kind: CheckKind,
    pub label: String,
}

impl Check {
    pub fn new(kind: CheckKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
        }
    }

    pub fn length_range(min: usize, max: usize, label: impl Into<String>) -> Self {
        Self::new(CheckKind::LengthRange { min, max }, label)
    }

    pub fn min_float(bound: f64, label: impl Into<String>) -> Self {
        Self::new(CheckKind::MinFloat { bound }, label)
    }

    pub fn min_int(bound: i64, label: impl Into<String>) -> Self {
        Self::new(CheckKind::MinInt { bound }, label)
    }

    pub fn max_int(bound: i64, label: impl Into<String>) -> Self {
        Self::new(CheckKind::MaxInt { bound }, label)
    }

    pub fn tax_id(label: impl Into<String>) -> Self {
        Self::new(CheckKind::TaxId, label)
    }

    pub fn email(label: impl Into<String>) -> Self {
        Self::new(CheckKind::Email, label)
    }
}

/// Rule for a single field: declared type, nullability, ordered checks.
///
/// Check order is evaluation order. Every check runs even when an earlier
/// one has already failed; all failures are retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    pub name: String,
    pub field_type: FieldType,
    pub nullable: bool,
    pub checks: Vec<Check>,
}

impl FieldRule {
    /// Create a non-nullable rule with no checks.
    pub fn required(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            nullable: false,
            checks: Vec::new(),
        }
    }

    /// Create a nullable rule with no checks.
    pub fn optional(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            nullable: true,
            ..Self::required(name, field_type)
        }
    }

    pub fn with_check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }
}

/// An ordered set of field rules.
///
/// Declaration order is both evaluation order and reporting order.
/// Non-strict: input columns not declared here pass through unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    fields: Vec<FieldRule>,
}

impl Schema {
    pub fn new(fields: Vec<FieldRule>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    /// Declaration position of a field, used for summary tie-breaking.
    pub fn field_position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|r| r.name == name)
    }
}

/// The customer record schema.
pub fn customer_schema() -> Schema {
    Schema::new(vec![
        FieldRule::required("name", FieldType::Text).with_check(Check::length_range(
            1,
            255,
            "name must be between 1 and 255 characters",
        )),
        FieldRule::required("tax_id", FieldType::Text)
            .with_check(Check::tax_id("invalid tax id")),
        FieldRule::required("email", FieldType::Text)
            .with_check(Check::email("invalid email")),
        FieldRule::required("contract_value", FieldType::Float)
            .with_check(Check::min_float(0.0, "contract value must not be negative")),
        FieldRule::required("age", FieldType::Integer)
            .with_check(Check::min_int(1, "age must be at least 1"))
            .with_check(Check::max_int(150, "age must be at most 150")),
    ])
}
