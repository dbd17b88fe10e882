//! Shared calculation workflow used by every front-end command.
//!
//! validate -> (reject | convert) -> attach warning
//!
//! Keeping this in one place means `convert`, `batch` and library callers all
//! apply the same rules; the commands only deal with presentation.

use tracing::{debug, warn};

use crate::domain::{AgeInput, AnimalType, CalculationResult, LabelConversion};
use crate::engine::{convert, convert_label, validate};
use crate::error::AppError;
use crate::io::ingest::{BatchInput, RowError};

/// A successful single calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub result: CalculationResult,
    /// Non-blocking validation message to show next to the result.
    pub warning: Option<String>,
}

/// One converted batch row.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConversion {
    pub line: usize,
    pub conversion: LabelConversion,
    pub warning: Option<String>,
}

/// All computed outputs of a `petage batch` run.
#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub converted: Vec<BatchConversion>,
    /// Ingest errors followed by rows rejected by validation, in line order.
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Validate and convert a single age.
///
/// Invalid input is an input error (exit code 2) carrying the validation
/// message; a warning-valid age is converted and the warning returned with it.
pub fn run_calculation(animal: AnimalType, age: AgeInput) -> Result<Calculation, AppError> {
    let outcome = validate(age);
    if !outcome.is_valid {
        let message = outcome.error.unwrap_or_else(|| "Invalid age".to_string());
        debug!(%animal, %age, %message, "age rejected");
        return Err(AppError::input(message));
    }

    let result = convert(animal, age);
    debug!(%animal, %age, human_age = result.human_age, formula = %result.formula, "converted");

    if let Some(message) = &outcome.error {
        warn!(%animal, %age, "{message}");
    }

    Ok(Calculation {
        result,
        warning: outcome.error,
    })
}

/// Apply the calculation workflow to every ingested row.
///
/// Rows that fail validation are reported alongside ingest errors instead of
/// aborting the batch.
pub fn run_batch(input: BatchInput) -> BatchOutput {
    let BatchInput {
        rows,
        mut row_errors,
        rows_read,
    } = input;

    let mut converted = Vec::with_capacity(rows.len());
    for row in rows {
        let outcome = validate(row.age);
        if !outcome.is_valid {
            row_errors.push(RowError {
                line: row.line,
                message: outcome.error.unwrap_or_else(|| "Invalid age".to_string()),
            });
            continue;
        }

        let conversion = convert_label(&row.label, row.age);
        if let LabelConversion::Fallback { label, .. } = &conversion {
            warn!(line = row.line, %label, "unknown species, using default multiplier");
        }
        converted.push(BatchConversion {
            line: row.line,
            conversion,
            warning: outcome.error,
        });
    }

    row_errors.sort_by_key(|e| e.line);
    debug!(
        rows_read,
        converted = converted.len(),
        rejected = row_errors.len(),
        "batch complete"
    );

    BatchOutput {
        converted,
        row_errors,
        rows_read,
    }
}
