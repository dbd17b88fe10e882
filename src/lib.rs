//! `pet-age` library crate.
//!
//! The binary (`petage`) is a thin wrapper around this library so that:
//!
//! - the conversion engine is testable without spawning processes
//! - the engine stays free of CLI, file and logging concerns
//! - other front-ends can call `engine::convert` / `engine::validate` directly

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod input;
pub mod io;
pub mod logging;
pub mod math;
pub mod report;
