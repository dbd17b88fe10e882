//! Formatted terminal output.
//!
//! We keep formatting code in one place so the engine stays free of
//! presentation and output changes are localized.

use crate::app::pipeline::{BatchOutput, Calculation};
use crate::domain::{AnimalType, ValidationOutcome};
use crate::report::ChartRow;

/// Format a single calculation as a result card.
pub fn format_result(calculation: &Calculation) -> String {
    let result = &calculation.result;
    let mut out = String::new();

    out.push_str(&format!(
        "{} aged {}\n",
        result.animal_type.display_name(),
        result.input_age
    ));
    out.push_str(&format!("Human age: {:.1}\n", result.human_age));
    out.push_str(&format!("Formula:   {}\n", result.formula));
    if let Some(warning) = &calculation.warning {
        out.push_str(&format!("Warning:   {warning}\n"));
    }

    out
}

/// Format a validation outcome for `petage validate`.
pub fn format_validation(outcome: &ValidationOutcome) -> String {
    let message = outcome.error.as_deref().unwrap_or_default();
    if outcome.is_warning() {
        format!("valid (warning: {message})\n")
    } else if outcome.is_valid {
        "valid\n".to_string()
    } else if message.is_empty() {
        "invalid\n".to_string()
    } else {
        format!("invalid: {message}\n")
    }
}

/// Format a species age chart as a two-column table.
pub fn format_age_chart(animal: AnimalType, rows: &[ChartRow]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} age chart\n", animal.display_name()));
    out.push_str(&format!("{:>6} {:>10}\n", "years", "human_age"));
    out.push_str(&format!("{:-<6} {:-<10}\n", "", ""));
    for row in rows {
        out.push_str(&format!("{:>6} {:>10.1}\n", row.years, row.human_age));
    }

    out
}

/// Format a batch run: converted rows, then anything that was skipped.
pub fn format_batch_summary(batch: &BatchOutput) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Rows: read={} converted={} rejected={}\n",
        batch.rows_read,
        batch.converted.len(),
        batch.row_errors.len()
    ));

    if !batch.converted.is_empty() {
        out.push('\n');
        out.push_str(
            format!("{:>5} {:<16} {:>8} {:>10}  {}\n", "line", "animal", "age", "human_age", "formula").trim_end(),
        );
        out.push('\n');
        for row in &batch.converted {
            let conv = &row.conversion;
            let mut line = format!(
                "{:>5} {:<16} {:>8} {:>10.1}  {}",
                row.line,
                truncate(conv.species_name(), 16),
                conv.input_age().to_string(),
                conv.human_age(),
                conv.formula()
            );
            if row.warning.is_some() {
                line.push_str(" (!)");
            }
            out.push_str(&line);
            out.push('\n');
        }
    }

    if !batch.row_errors.is_empty() {
        out.push_str("\nSkipped rows:\n");
        for err in &batch.row_errors {
            out.push_str(&format!("  line {}: {}\n", err.line, err.message));
        }
    }

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('.');
    out
}
