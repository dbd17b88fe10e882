//! Read/write single-result JSON files.
//!
//! A result file is the portable record of one `petage convert` run: the
//! calculation result, any validation warning, and when it was produced.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::app::pipeline::Calculation;
use crate::domain::CalculationResult;
use crate::error::AppError;

pub const TOOL_NAME: &str = "petage";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub result: CalculationResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl ResultFile {
    pub fn new(calculation: &Calculation, generated_at: DateTime<Utc>) -> Self {
        Self {
            tool: TOOL_NAME.to_string(),
            generated_at,
            result: calculation.result.clone(),
            warning: calculation.warning.clone(),
        }
    }

    pub fn calculation(&self) -> Calculation {
        Calculation {
            result: self.result.clone(),
            warning: self.warning.clone(),
        }
    }
}

/// Write a result JSON file stamped with the current time.
pub fn write_result_json(path: &Path, calculation: &Calculation) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::output(format!("Failed to create result JSON '{}': {e}", path.display())))?;

    let doc = ResultFile::new(calculation, Utc::now());
    serde_json::to_writer_pretty(file, &doc)
        .map_err(|e| AppError::output(format!("Failed to write result JSON: {e}")))?;

    info!(path = %path.display(), "wrote result JSON");
    Ok(())
}

/// Read a result JSON file.
pub fn read_result_json(path: &Path) -> Result<ResultFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open result JSON '{}': {e}", path.display())))?;
    let doc: ResultFile =
        serde_json::from_reader(file).map_err(|e| AppError::input(format!("Invalid result JSON: {e}")))?;
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_calculation;
    use crate::domain::{AgeInput, AnimalType};

    #[test]
    fn result_file_survives_disk() {
        let calc = run_calculation(AnimalType::Hamster, AgeInput::new(1, 0)).unwrap();
        let path = std::env::temp_dir().join(format!("petage_result_{}.json", std::process::id()));

        write_result_json(&path, &calc).unwrap();
        let doc = read_result_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(doc.tool, TOOL_NAME);
        assert_eq!(doc.calculation(), calc);
    }

    #[test]
    fn json_uses_lowercase_species_and_omits_empty_warning() {
        let calc = run_calculation(AnimalType::Dog, AgeInput::new(2, 0)).unwrap();
        let doc = ResultFile::new(&calc, DateTime::from_timestamp(0, 0).unwrap());
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["result"]["animal_type"], "dog");
        assert_eq!(json["result"]["human_age"], 24.0);
        assert_eq!(json["result"]["input_age"]["years"], 2);
        assert!(json.get("warning").is_none());
    }

    #[test]
    fn unreadable_json_is_an_input_error() {
        let path = std::env::temp_dir().join(format!("petage_bad_{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_result_json(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
    }
}
