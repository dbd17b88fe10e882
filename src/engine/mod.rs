//! The age-conversion engine.
//!
//! Responsibilities:
//!
//! - hold the per-species formula tables (`tables`)
//! - map `(AnimalType, AgeInput)` to a human-age equivalent (`convert`)
//! - check raw age input before conversion (`validate`)
//!
//! Everything here is pure: no I/O, no logging, no shared state.

pub mod convert;
pub mod tables;
pub mod validate;

pub use convert::*;
pub use validate::*;
