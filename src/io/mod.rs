//! Input/output helpers.
//!
//! - batch CSV ingest (`ingest`)
//! - CSV export of converted rows (`export`)
//! - single-result JSON files (`result_file`)

pub mod export;
pub mod ingest;
pub mod result_file;

pub use export::*;
pub use ingest::*;
pub use result_file::*;
