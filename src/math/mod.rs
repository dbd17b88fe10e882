//! Mathematical utilities: piecewise-linear evaluation and rounding.

pub mod piecewise;

pub use piecewise::*;
