//! Command-line parsing for the pet age calculator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! conversion engine and from command dispatch (`app`).

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::domain::{AgeInput, AnimalType};
use crate::error::AppError;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "petage", version, about = "Animal age to human age calculator")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert one age to its human-age equivalent.
    Convert(ConvertArgs),
    /// Check an age without converting it.
    Validate(AgeArgs),
    /// Print human-age equivalents for whole years.
    Chart(ChartArgs),
    /// Convert every row of an `animal,years,months` CSV.
    Batch(BatchArgs),
    /// Print a result file written by `petage convert --export-json`.
    Show(ShowArgs),
}

/// Age given as two text fields.
#[derive(Debug, Args, Clone)]
pub struct AgeArgs {
    /// Whole years.
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    pub years: String,

    /// Additional months (0-11).
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    pub months: String,
}

impl AgeArgs {
    /// Parse both fields as exact integers; anything else is an input error.
    pub fn parse_strict(&self) -> Result<AgeInput, AppError> {
        Ok(AgeInput::new(
            strict_int("years", &self.years)?,
            strict_int("months", &self.months)?,
        ))
    }

    /// Read both fields leniently and clamp them into range.
    pub fn parse_sanitized(&self) -> AgeInput {
        AgeInput::from_fields(&self.years, &self.months)
    }
}

fn strict_int(name: &str, s: &str) -> Result<i32, AppError> {
    s.trim()
        .parse()
        .map_err(|_| AppError::input(format!("Invalid --{name} '{s}' (expected a whole number).")))
}

#[derive(Debug, Args, Clone)]
pub struct ConvertArgs {
    /// Species (defaults to PETAGE_DEFAULT_ANIMAL, else dog).
    #[arg(short, long, value_enum)]
    pub animal: Option<AnimalType>,

    #[command(flatten)]
    pub age: AgeArgs,

    /// Pass the numbers through unclamped so validation sees them as typed.
    #[arg(long)]
    pub raw: bool,

    /// Save the result (with timestamp) as JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct ChartArgs {
    /// Species (defaults to PETAGE_DEFAULT_ANIMAL, else dog).
    #[arg(short, long, value_enum)]
    pub animal: Option<AnimalType>,

    /// Last year to show (defaults to PETAGE_CHART_YEARS, else 15).
    #[arg(long)]
    pub max_years: Option<u32>,
}

#[derive(Debug, Args, Clone)]
pub struct BatchArgs {
    /// CSV with `animal,years[,months]` columns.
    #[arg(short, long, value_name = "CSV")]
    pub input: PathBuf,

    /// Write converted rows to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct ShowArgs {
    /// Result JSON file.
    #[arg(long, value_name = "JSON")]
    pub result: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn convert_flags_parse() {
        let cli = Cli::parse_from(["petage", "-vv", "convert", "--animal", "hamster", "-y", "1", "-m", "3"]);
        assert_eq!(cli.verbose, 2);
        let Command::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.animal, Some(AnimalType::Hamster));
        assert_eq!(args.age.parse_sanitized(), AgeInput::new(1, 3));
        assert!(!args.raw);
    }

    #[test]
    fn negative_values_reach_strict_parsing() {
        let cli = Cli::parse_from(["petage", "validate", "--years", "-1"]);
        let Command::Validate(age) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(age.parse_strict().unwrap(), AgeInput::new(-1, 0));
        assert_eq!(age.parse_sanitized(), AgeInput::new(0, 0));
    }

    #[test]
    fn sanitized_parsing_clamps_oversized_fields() {
        let args = AgeArgs {
            years: "5000000000".to_string(),
            months: "14".to_string(),
        };
        assert_eq!(args.parse_sanitized(), AgeInput::from_fields("5000000000", "14"));
        assert_eq!(args.parse_sanitized(), AgeInput::new(crate::input::MAX_YEARS, 11));
    }

    #[test]
    fn strict_parsing_rejects_text() {
        let args = AgeArgs {
            years: "two".to_string(),
            months: "0".to_string(),
        };
        let err = args.parse_strict().unwrap_err();
        assert!(err.to_string().contains("--years"));
    }
}
