//! Export converted batch rows to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::app::pipeline::BatchConversion;
use crate::error::AppError;

pub const EXPORT_HEADER: [&str; 6] = ["line", "animal", "years", "months", "human_age", "formula"];

/// Write converted rows to a CSV file.
pub fn write_results_csv(path: &Path, rows: &[BatchConversion]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::output(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_results(file, rows)?;
    info!(path = %path.display(), rows = rows.len(), "wrote results CSV");
    Ok(())
}

/// Write converted rows as CSV to any writer.
pub fn write_results<W: Write>(writer: W, rows: &[BatchConversion]) -> Result<(), AppError> {
    let mut out = csv::Writer::from_writer(writer);

    out.write_record(EXPORT_HEADER)
        .map_err(|e| AppError::output(format!("Failed to write export CSV header: {e}")))?;

    for row in rows {
        let conv = &row.conversion;
        let age = conv.input_age();
        out.write_record([
            row.line.to_string(),
            conv.species_name().to_string(),
            age.years.to_string(),
            age.months.to_string(),
            format!("{:.1}", conv.human_age()),
            conv.formula().to_string(),
        ])
        .map_err(|e| AppError::output(format!("Failed to write export CSV row: {e}")))?;
    }

    out.flush()
        .map_err(|e| AppError::output(format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}
