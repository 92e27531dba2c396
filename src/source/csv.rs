//! Strict CSV reader and writer
//!
//! - UTF-8 only, header row required.
//! - Double-quoted fields may contain the delimiter, quotes (doubled), and
//!   newlines. Line endings are normalized to `\n` on read.
//! - Every data row must have exactly as many fields as the header; a
//!   mismatch is a fatal error naming the offending line.
//! - Blank lines are skipped.
//! - Empty fields become `Cell::Missing`; everything else is text. Typed
//!   interpretation is the schema's job, not the codec's.

use std::fs;
use std::path::PathBuf;

use crate::table::{Batch, Cell, Row};

use super::errors::{SourceError, SourceResult};
use super::{RecordSink, RecordSource};

/// Reads a CSV file into a `Batch`.
pub struct CsvReader {
    path: PathBuf,
    delimiter: char,
}

impl CsvReader {
    pub fn new(path: impl Into<PathBuf>, delimiter: char) -> Self {
        Self {
            path: path.into(),
            delimiter,
        }
    }
}

impl RecordSource for CsvReader {
    fn read_batch(&self) -> SourceResult<Batch> {
        let path = self.path.display().to_string();
        let content = fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: path.clone(),
            source,
        })?;

        let mut records = parse_csv(&content, self.delimiter, &path)?.into_iter();

        let (_, columns) = records.next().ok_or(SourceError::EmptyInput { path: path.clone() })?;

        let mut rows = Vec::new();
        for (line, fields) in records {
            if fields.len() != columns.len() {
                return Err(SourceError::MalformedRow {
                    path,
                    line,
                    expected: columns.len(),
                    found: fields.len(),
                });
            }
            rows.push(Row::new(fields.iter().map(|f| Cell::from_raw(f)).collect()));
        }

        Ok(Batch::new(columns, rows))
    }
}

/// Writes rows as CSV, quoting only when needed.
pub struct CsvWriter {
    path: PathBuf,
    delimiter: char,
}

impl CsvWriter {
    pub fn new(path: impl Into<PathBuf>, delimiter: char) -> Self {
        Self {
            path: path.into(),
            delimiter,
        }
    }
}

impl RecordSink for CsvWriter {
    fn write_batch(&self, columns: &[String], rows: &[Row]) -> SourceResult<()> {
        let mut out = String::new();

        encode_record(&mut out, columns.iter().map(String::as_str), self.delimiter);
        for row in rows {
            let rendered: Vec<String> = row
                .cells
                .iter()
                .map(|cell| cell.render().unwrap_or_default())
                .collect();
            encode_record(&mut out, rendered.iter().map(String::as_str), self.delimiter);
        }

        fs::write(&self.path, out).map_err(|source| SourceError::Write {
            path: self.path.display().to_string(),
            source,
        })
    }
}

fn encode_record<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>, delimiter: char) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(delimiter);
        }
        first = false;
        encode_field(out, field, delimiter);
    }
    out.push('\n');
}

fn encode_field(out: &mut String, field: &str, delimiter: char) {
    let needs_quoting = field.contains(delimiter)
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r');
    if needs_quoting {
        out.push('"');
        for c in field.chars() {
            if c == '"' {
                out.push('"');
            }
            out.push(c);
        }
        out.push('"');
    } else {
        out.push_str(field);
    }
}

/// Parses CSV content into records tagged with their 1-based starting line.
fn parse_csv(
    content: &str,
    delimiter: char,
    path: &str,
) -> SourceResult<Vec<(usize, Vec<String>)>> {
    let content = content.replace("\r\n", "\n");

    let mut records: Vec<(usize, Vec<String>)> = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut line = 1usize;
    let mut record_line = 1usize;
    let mut in_quotes = false;
    let mut quote_open_line = 1usize;
    // True once the current record has any content beyond a bare newline.
    let mut record_started = false;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '\n' => {
                    line += 1;
                    field.push('\n');
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            c if c == delimiter => {
                fields.push(std::mem::take(&mut field));
                record_started = true;
            }
            '"' if field.is_empty() => {
                in_quotes = true;
                quote_open_line = line;
                record_started = true;
            }
            '\n' => {
                line += 1;
                if record_started || !field.is_empty() {
                    fields.push(std::mem::take(&mut field));
                    records.push((record_line, std::mem::take(&mut fields)));
                }
                record_started = false;
                record_line = line;
            }
            _ => {
                field.push(c);
                record_started = true;
            }
        }
    }

    if in_quotes {
        return Err(SourceError::UnterminatedQuote {
            path: path.to_string(),
            line: quote_open_line,
        });
    }

    // Final record without a trailing newline.
    if record_started || !field.is_empty() {
        fields.push(field);
        records.push((record_line, fields));
    }

    Ok(records)
}
