//! Environment-backed defaults.
//!
//! Settings are read from the process environment after loading an optional
//! `.env` file. CLI flags take precedence over anything configured here.

use crate::domain::AnimalType;
use crate::error::AppError;

pub const ENV_DEFAULT_ANIMAL: &str = "PETAGE_DEFAULT_ANIMAL";
pub const ENV_CHART_YEARS: &str = "PETAGE_CHART_YEARS";

const DEFAULT_CHART_YEARS: u32 = 15;
/// Keeps `chart` output to a sane number of rows.
const MAX_CHART_YEARS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Species used when `--animal` is not given.
    pub default_animal: AnimalType,
    /// Last year shown by `petage chart` when `--max-years` is not given.
    pub chart_years: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_animal: AnimalType::Dog,
            chart_years: DEFAULT_CHART_YEARS,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup (the environment, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut settings = Self::default();

        if let Some(raw) = lookup(ENV_DEFAULT_ANIMAL).filter(|v| !v.trim().is_empty()) {
            settings.default_animal = AnimalType::from_label(&raw).ok_or_else(|| {
                AppError::input(format!(
                    "Invalid {ENV_DEFAULT_ANIMAL}='{raw}' (expected dog, cat, rabbit, bird or hamster)."
                ))
            })?;
        }

        if let Some(raw) = lookup(ENV_CHART_YEARS).filter(|v| !v.trim().is_empty()) {
            settings.chart_years = parse_chart_years(&raw)?;
        }

        Ok(settings)
    }
}

pub fn parse_chart_years(raw: &str) -> Result<u32, AppError> {
    let years: u32 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::input(format!("Invalid {ENV_CHART_YEARS}='{raw}' (expected a whole number).")))?;
    check_chart_years(years)
}

/// Chart length must be between 1 and 100 years.
pub fn check_chart_years(years: u32) -> Result<u32, AppError> {
    if years == 0 || years > MAX_CHART_YEARS {
        return Err(AppError::input(format!(
            "Chart length must be between 1 and {MAX_CHART_YEARS} years, got {years}."
        )));
    }
    Ok(years)
}
