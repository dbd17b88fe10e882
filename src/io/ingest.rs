//! Batch CSV ingest.
//!
//! Turns a CSV of `animal,years,months` rows into ages ready for the
//! calculation pipeline.
//!
//! - header names are case-insensitive; `months` is optional
//! - rows with unparseable numbers are skipped and reported, not fatal
//! - the species label is kept verbatim; unknown species are resolved later
//! - no validation or conversion happens here

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use crate::domain::AgeInput;
use crate::error::AppError;

/// One parsed input row.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRow {
    /// 1-based line number in the source file.
    pub line: usize,
    pub label: String,
    pub age: AgeInput,
}

/// A row-level problem encountered during ingest or conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: parsed rows plus everything that was skipped.
#[derive(Debug, Clone)]
pub struct BatchInput {
    pub rows: Vec<BatchRow>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Load a batch CSV from disk.
pub fn load_batch(path: &Path) -> Result<BatchInput, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open CSV '{}': {e}", path.display())))?;
    let batch = read_batch(file)?;
    debug!(
        path = %path.display(),
        rows_read = batch.rows_read,
        rows_ok = batch.rows.len(),
        "loaded batch CSV"
    );
    Ok(batch)
}

/// Parse a batch CSV from any reader.
pub fn read_batch<R: Read>(reader: R) -> Result<BatchInput, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    for required in ["animal", "years"] {
        if !header_map.contains_key(required) {
            return Err(AppError::input(format!("Missing required column: `{required}`")));
        }
    }

    let mut rows = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // Header is line 1.
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse_row(&record, &header_map) {
            Ok((label, age)) => rows.push(BatchRow { line, label, age }),
            Err(message) => row_errors.push(RowError { line, message }),
        }
    }

    Ok(BatchInput {
        rows,
        row_errors,
        rows_read,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports may prefix the first header with a BOM.
    name.trim().trim_start_matches('\u{feff}').to_ascii_lowercase()
}

fn parse_row(record: &StringRecord, header_map: &HashMap<String, usize>) -> Result<(String, AgeInput), String> {
    let label = get_required(record, header_map, "animal")?.to_string();
    let years = parse_int("years", get_required(record, header_map, "years")?)?;
    let months = match get_optional(record, header_map, "months") {
        Some(s) => parse_int("months", s)?,
        None => 0,
    };
    Ok((label, AgeInput::new(years, months)))
}

fn get_required<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Result<&'a str, String> {
    let idx = header_map
        .get(name)
        .ok_or_else(|| format!("Missing required column: `{name}`"))?;
    record
        .get(*idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing required value: `{name}`"))
}

fn get_optional<'a>(record: &'a StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Option<&'a str> {
    let idx = header_map.get(name)?;
    record.get(*idx).map(str::trim).filter(|s| !s.is_empty())
}

fn parse_int(name: &str, s: &str) -> Result<i32, String> {
    s.parse::<i32>()
        .map_err(|_| format!("Invalid `{name}` value '{s}' (expected a whole number)."))
}
