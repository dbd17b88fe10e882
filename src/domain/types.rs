//! Shared domain types.
//!
//! These types are plain values: cheap to copy or clone, serializable so they
//! can be exported to CSV/JSON, and free of any presentation concerns.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Species supported by the conversion engine.
///
/// The set is closed: adding a species means adding a formula table in
/// `engine::tables`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AnimalType {
    Dog,
    Cat,
    Rabbit,
    Bird,
    Hamster,
}

impl AnimalType {
    pub const ALL: [AnimalType; 5] = [
        AnimalType::Dog,
        AnimalType::Cat,
        AnimalType::Rabbit,
        AnimalType::Bird,
        AnimalType::Hamster,
    ];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            AnimalType::Dog => "Dog",
            AnimalType::Cat => "Cat",
            AnimalType::Rabbit => "Rabbit",
            AnimalType::Bird => "Bird",
            AnimalType::Hamster => "Hamster",
        }
    }

    /// Lowercase identifier used in CSV files, JSON and env vars.
    pub fn key(self) -> &'static str {
        match self {
            AnimalType::Dog => "dog",
            AnimalType::Cat => "cat",
            AnimalType::Rabbit => "rabbit",
            AnimalType::Bird => "bird",
            AnimalType::Hamster => "hamster",
        }
    }

    /// Parse a free-form label (`"Dog"`, `" cat "`, `"HAMSTER"`).
    ///
    /// Returns `None` for anything outside the supported set.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|animal| animal.key().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for AnimalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// An age expressed as whole years plus months.
///
/// This is a duration, not a date. Fields are signed so that out-of-range
/// input can reach `engine::validate` and be rejected with a message there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgeInput {
    pub years: i32,
    pub months: i32,
}

impl AgeInput {
    pub fn new(years: i32, months: i32) -> Self {
        Self { years, months }
    }

    /// Age as a fractional year: `years + months / 12`.
    pub fn total_years(self) -> f64 {
        f64::from(self.years) + f64::from(self.months) / 12.0
    }

    /// Age in whole months: `years * 12 + months`.
    pub fn total_months(self) -> f64 {
        f64::from(self.years) * 12.0 + f64::from(self.months)
    }
}

impl fmt::Display for AgeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y {}m", self.years, self.months)
    }
}

/// Output of `engine::convert` for a known species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Human-age equivalent, rounded to one decimal.
    pub human_age: f64,
    /// Which segment and coefficients produced `human_age`.
    pub formula: String,
    pub animal_type: AnimalType,
    pub input_age: AgeInput,
}

/// Output of `engine::convert_label`.
///
/// Labels that name a supported species go through the species formula;
/// anything else is converted with the default multiplier.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelConversion {
    Known(CalculationResult),
    Fallback {
        label: String,
        human_age: f64,
        formula: String,
        input_age: AgeInput,
    },
}

impl LabelConversion {
    pub fn human_age(&self) -> f64 {
        match self {
            LabelConversion::Known(result) => result.human_age,
            LabelConversion::Fallback { human_age, .. } => *human_age,
        }
    }

    pub fn formula(&self) -> &str {
        match self {
            LabelConversion::Known(result) => &result.formula,
            LabelConversion::Fallback { formula, .. } => formula,
        }
    }

    pub fn input_age(&self) -> AgeInput {
        match self {
            LabelConversion::Known(result) => result.input_age,
            LabelConversion::Fallback { input_age, .. } => *input_age,
        }
    }

    /// Name to show for the species: the display name when known, otherwise
    /// the label as given.
    pub fn species_name(&self) -> &str {
        match self {
            LabelConversion::Known(result) => result.animal_type.display_name(),
            LabelConversion::Fallback { label, .. } => label.trim(),
        }
    }
}

/// Result of `engine::validate`.
///
/// `error` may be set on a valid outcome: that is a warning the caller shows
/// next to the result instead of blocking the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            error: Some(message.into()),
        }
    }

    /// Valid, but carrying an advisory message.
    pub fn is_warning(&self) -> bool {
        self.is_valid && self.error.is_some()
    }
}
