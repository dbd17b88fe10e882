//! Domain types shared by the engine, the pipeline and the front-ends.
//!
//! This module defines:
//!
//! - the species tag (`AnimalType`) and the age value (`AgeInput`)
//! - engine outputs (`CalculationResult`, `LabelConversion`, `ValidationOutcome`)

pub mod types;

pub use types::*;
