//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and initializes logging
//! - loads environment-backed settings
//! - runs the calculation pipeline for the chosen command
//! - prints reports and writes optional exports

use clap::Parser;
use tracing::{debug, info};

use crate::cli::{BatchArgs, ChartArgs, Command, ConvertArgs, ShowArgs};
use crate::config::{Settings, check_chart_years};
use crate::domain::AgeInput;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `petage` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    crate::logging::init(cli.verbose);

    let settings = Settings::from_env()?;
    debug!(?settings, "loaded settings");

    match cli.command {
        Command::Convert(args) => handle_convert(args, &settings),
        Command::Validate(args) => handle_validate(args.parse_strict()?),
        Command::Chart(args) => handle_chart(args, &settings),
        Command::Batch(args) => handle_batch(args),
        Command::Show(args) => handle_show(args),
    }
}

fn handle_convert(args: ConvertArgs, settings: &Settings) -> Result<(), AppError> {
    let animal = args.animal.unwrap_or(settings.default_animal);
    let age = if args.raw {
        args.age.parse_strict()?
    } else {
        args.age.parse_sanitized()
    };
    info!(%animal, %age, raw = args.raw, "convert");

    let calculation = pipeline::run_calculation(animal, age)?;
    print!("{}", crate::report::format_result(&calculation));

    if let Some(path) = &args.export_json {
        crate::io::result_file::write_result_json(path, &calculation)?;
    }
    Ok(())
}

fn handle_validate(age: AgeInput) -> Result<(), AppError> {
    let outcome = crate::engine::validate(age);
    let text = crate::report::format_validation(&outcome);
    if !outcome.is_valid {
        return Err(AppError::input(text.trim_end()));
    }
    print!("{text}");
    Ok(())
}

fn handle_chart(args: ChartArgs, settings: &Settings) -> Result<(), AppError> {
    let animal = args.animal.unwrap_or(settings.default_animal);
    let max_years = check_chart_years(args.max_years.unwrap_or(settings.chart_years))?;

    let rows = crate::report::age_chart(animal, max_years);
    print!("{}", crate::report::format_age_chart(animal, &rows));
    Ok(())
}

fn handle_batch(args: BatchArgs) -> Result<(), AppError> {
    let input = crate::io::ingest::load_batch(&args.input)?;
    let output = pipeline::run_batch(input);
    print!("{}", crate::report::format_batch_summary(&output));

    if let Some(path) = &args.export {
        crate::io::export::write_results_csv(path, &output.converted)?;
    }

    if output.converted.is_empty() {
        return Err(AppError::input(format!(
            "No rows could be converted from '{}'.",
            args.input.display()
        )));
    }
    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let doc = crate::io::result_file::read_result_json(&args.result)?;
    println!("Saved by {} at {}", doc.tool, doc.generated_at.to_rfc3339());
    print!("{}", crate::report::format_result(&doc.calculation()));
    Ok(())
}
