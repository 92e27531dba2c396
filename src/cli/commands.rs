//! CLI command implementations
//!
//! The validate command is the whole pipeline: read the batch, run the
//! schema, write the valid set and the error report, and narrate progress
//! on the console. Fatal errors abort before any artifact is written.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::engine;
use crate::observability::Logger;
use crate::report;
use crate::schema::customer_schema;
use crate::source::{CsvReader, CsvWriter, RecordSink, RecordSource};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Timestamp format shown inside the report header.
const REPORT_TIMESTAMP: &str = "%d/%m/%Y %H:%M:%S";
/// Timestamp format used in the default report filename.
const FILENAME_TIMESTAMP: &str = "%Y%m%d_%H%M%S";

/// Parse arguments and dispatch.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Validate {
            input,
            output,
            report,
            delimiter,
        } => validate(&input, output, report, delimiter),
    }
}

/// Runs one full validation pass over the input file.
pub fn validate(
    input: &Path,
    output: Option<PathBuf>,
    report_path: Option<PathBuf>,
    delimiter: char,
) -> CliResult<()> {
    let batch = CsvReader::new(input, delimiter).read_batch()?;
    Logger::info(
        "READ_COMPLETE",
        &[
            ("path", &input.display().to_string()),
            ("records", &batch.len().to_string()),
        ],
    );

    let schema = customer_schema();
    let result = engine::validate(&schema, &batch)?;
    Logger::info(
        "VALIDATION_COMPLETE",
        &[
            ("valid", &result.valid_records.len().to_string()),
            ("invalid", &result.invalid_record_count().to_string()),
        ],
    );

    if !result.is_fully_valid() {
        let now: DateTime<Local> = Local::now();
        let path = report_path.unwrap_or_else(|| default_report_path(input, &now));
        let rendered = report::render_report(
            &result.failures,
            &now.format(REPORT_TIMESTAMP).to_string(),
        );
        fs::write(&path, rendered).map_err(|source| CliError::ReportWrite {
            path: path.display().to_string(),
            source,
        })?;
        Logger::info(
            "REPORT_WRITTEN",
            &[
                ("path", &path.display().to_string()),
                ("errors", &result.failures.len().to_string()),
            ],
        );

        for (field, count) in report::summarize_by_field(&schema, &result.failures) {
            Logger::info(
                "ERROR_SUMMARY",
                &[("field", field.as_str()), ("count", &count.to_string())],
            );
        }
    }

    if result.valid_records.is_empty() {
        Logger::warn("NO_VALID_RECORDS", &[]);
    } else {
        let path = output.unwrap_or_else(|| default_output_path(input));
        CsvWriter::new(&path, delimiter).write_batch(&batch.columns, &result.valid_records)?;
        Logger::info(
            "VALID_RECORDS_WRITTEN",
            &[
                ("path", &path.display().to_string()),
                ("records", &result.valid_records.len().to_string()),
            ],
        );
    }

    Ok(())
}

fn input_stem(input: &Path) -> &str {
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("records")
}

fn default_output_path(input: &Path) -> PathBuf {
    input.with_file_name(format!("{}_valid.csv", input_stem(input)))
}

fn default_report_path(input: &Path, now: &DateTime<Local>) -> PathBuf {
    input.with_file_name(format!(
        "{}_errors_{}.txt",
        input_stem(input),
        now.format(FILENAME_TIMESTAMP)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HEADER: &str = "name,tax_id,email,contract_value,age\n";
    const GOOD: &str = "Alice,111.444.777-35,alice@example.com,1500.00,34\n";
    const BAD_EMAIL: &str = "Bob,111.444.777-35,bob-at-example,2000.00,40\n";

    fn run_validate(content: &str) -> (TempDir, PathBuf, PathBuf, CliResult<()>) {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("customers.csv");
        let output = dir.path().join("valid.csv");
        let report = dir.path().join("errors.txt");
        fs::write(&input, content).unwrap();
        let outcome = validate(&input, Some(output.clone()), Some(report.clone()), ',');
        (dir, output, report, outcome)
    }

    #[test]
    fn test_all_valid_writes_output_and_no_report() {
        let (_dir, output, report, outcome) =
            run_validate(&format!("{}{}{}", HEADER, GOOD, GOOD));
        assert!(outcome.is_ok());
        assert!(output.exists());
        assert!(!report.exists());
    }

    #[test]
    fn test_partial_valid_writes_both_artifacts() {
        let (_dir, output, report, outcome) =
            run_validate(&format!("{}{}{}", HEADER, GOOD, BAD_EMAIL));
        assert!(outcome.is_ok());
        assert!(output.exists());
        assert!(report.exists());

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("Alice"));
        assert!(!written.contains("Bob"));

        let rendered = fs::read_to_string(&report).unwrap();
        assert!(rendered.contains("Field: email"));
        assert!(rendered.contains("Value: bob-at-example"));
    }

    #[test]
    fn test_all_invalid_skips_output() {
        let (_dir, output, report, outcome) =
            run_validate(&format!("{}{}", HEADER, BAD_EMAIL));
        assert!(outcome.is_ok());
        assert!(!output.exists());
        assert!(report.exists());
    }

    #[test]
    fn test_missing_input_is_fatal_with_no_artifacts() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("absent.csv");
        let output = dir.path().join("valid.csv");
        let report = dir.path().join("errors.txt");

        let outcome = validate(&input, Some(output.clone()), Some(report.clone()), ',');
        assert!(outcome.is_err());
        assert!(!output.exists());
        assert!(!report.exists());
    }

    #[test]
    fn test_missing_schema_column_is_fatal() {
        let (_dir, output, report, outcome) =
            run_validate("name,email\nAlice,alice@example.com\n");
        match outcome {
            Err(CliError::Engine(e)) => {
                assert!(e.to_string().contains("tax_id"));
            }
            other => panic!("expected engine error, got {:?}", other.err()),
        }
        assert!(!output.exists());
        assert!(!report.exists());
    }

    #[test]
    fn test_default_paths_derive_from_input() {
        let input = Path::new("/data/customers.csv");
        assert_eq!(
            default_output_path(input),
            PathBuf::from("/data/customers_valid.csv")
        );

        let now = Local::now();
        let report = default_report_path(input, &now);
        let name = report.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("customers_errors_"));
        assert!(name.ends_with(".txt"));
    }
}
