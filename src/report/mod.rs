//! Error report rendering
//!
//! The report is byte-deterministic for a given failure sequence: grouping
//! is by row index ascending, and failures inside a group keep the order
//! the engine produced them in (field declaration order, then check order).
//! The only timestamp in the report is supplied by the caller; nothing here
//! reads the clock.

use std::collections::BTreeMap;

use crate::engine::Failure;
use crate::schema::Schema;

const HEAVY_RULE: &str =
    "================================================================================";
const LIGHT_RULE: &str =
    "────────────────────────────────────────────────────────────────────────────────";

/// Rows are displayed 1-based, offset by one more for the header row of the
/// source file.
const DISPLAY_ROW_OFFSET: usize = 2;

/// Renders the full error report.
pub fn render_report(failures: &[Failure], generated_at: &str) -> String {
    let mut grouped: BTreeMap<usize, Vec<&Failure>> = BTreeMap::new();
    for failure in failures {
        grouped.entry(failure.row_index).or_default().push(failure);
    }

    let mut out = String::new();
    out.push_str(HEAVY_RULE);
    out.push('\n');
    out.push_str("ERROR REPORT - CUSTOMER DATA VALIDATION\n");
    out.push_str(HEAVY_RULE);
    out.push('\n');
    out.push_str(&format!("Generated: {}\n", generated_at));
    out.push_str(&format!("Total errors: {}\n", failures.len()));
    out.push_str(HEAVY_RULE);
    out.push('\n');

    for (row_index, group) in &grouped {
        out.push('\n');
        out.push_str(LIGHT_RULE);
        out.push('\n');
        out.push_str(&format!("ROW {}\n", row_index + DISPLAY_ROW_OFFSET));
        out.push_str(LIGHT_RULE);
        out.push('\n');

        for failure in group {
            out.push('\n');
            out.push_str(&format!("  Field: {}\n", failure.field));
            out.push_str(&format!("  Error: {}\n", failure.label));
            if let Some(value) = &failure.value {
                out.push_str(&format!("  Value: {}\n", value));
            }
        }
    }

    out.push('\n');
    out.push_str(HEAVY_RULE);
    out.push('\n');
    out.push_str("END OF REPORT\n");
    out.push_str(HEAVY_RULE);
    out.push('\n');

    out
}

/// Failure counts per field, descending; ties keep field declaration order.
/// Fields without failures are omitted.
pub fn summarize_by_field(schema: &Schema, failures: &[Failure]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = schema
        .fields()
        .iter()
        .map(|rule| {
            let count = failures.iter().filter(|f| f.field == rule.name).count();
            (rule.name.clone(), count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();

    // Stable sort preserves declaration order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::customer_schema;

    fn failure(row_index: usize, field: &str, label: &str, value: Option<&str>) -> Failure {
        Failure {
            row_index,
            field: field.into(),
            label: label.into(),
            value: value.map(String::from),
        }
    }

    #[test]
    fn test_report_is_deterministic() {
        let failures = vec![
            failure(1, "email", "invalid email", Some("a@b")),
            failure(3, "age", "age must be at most 150", Some("151")),
        ];
        let first = render_report(&failures, "01/01/2025 12:00:00");
        let second = render_report(&failures, "01/01/2025 12:00:00");
        assert_eq!(first, second);
    }

    #[test]
    fn test_report_groups_by_row_with_display_offset() {
        let failures = vec![
            failure(2, "age", "age must be at least 1", Some("0")),
            failure(0, "email", "invalid email", Some("a@b")),
        ];
        let report = render_report(&failures, "01/01/2025 12:00:00");

        // Row 0 displays as 2, row 2 displays as 4; ascending by row.
        let row2 = report.find("ROW 2").unwrap();
        let row4 = report.find("ROW 4").unwrap();
        assert!(row2 < row4);
    }

    #[test]
    fn test_report_keeps_engine_order_within_a_row() {
        let failures = vec![
            failure(0, "name", "value is required", None),
            failure(0, "age", "age must be at least 1", Some("0")),
        ];
        let report = render_report(&failures, "x");
        let name_pos = report.find("Field: name").unwrap();
        let age_pos = report.find("Field: age").unwrap();
        assert!(name_pos < age_pos);
    }

    #[test]
    fn test_report_omits_value_line_when_absent() {
        let failures = vec![failure(0, "name", "value is required", None)];
        let report = render_report(&failures, "x");
        assert!(report.contains("Error: value is required"));
        assert!(!report.contains("Value:"));
    }

    #[test]
    fn test_report_header_and_footer() {
        let report = render_report(&[], "31/12/2025 23:59:59");
        assert!(report.starts_with(HEAVY_RULE));
        assert!(report.contains("Generated: 31/12/2025 23:59:59"));
        assert!(report.contains("Total errors: 0"));
        assert!(report.ends_with(&format!("END OF REPORT\n{}\n", HEAVY_RULE)));
    }

    #[test]
    fn test_summary_descending_with_declaration_tie_break() {
        let schema = customer_schema();
        let failures = vec![
            failure(0, "age", "age must be at least 1", Some("0")),
            failure(1, "age", "age must be at most 150", Some("151")),
            failure(2, "email", "invalid email", None),
            failure(3, "name", "value is required", None),
        ];

        let summary = summarize_by_field(&schema, &failures);
        // age leads on count; name and email tie at 1 and keep declaration
        // order (name before email).
        assert_eq!(
            summary,
            vec![
                ("age".to_string(), 2),
                ("name".to_string(), 1),
                ("email".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_summary_empty_when_no_failures() {
        assert!(summarize_by_field(&customer_schema(), &[]).is_empty());
    }
}
