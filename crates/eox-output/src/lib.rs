//! Output writing for the EoX report pipeline.
//!
//! One output file per run, derived from the input name unless overridden,
//! overwritten if it already exists. No interim files are produced.

pub mod error;
pub mod writer;

pub use error::{OutputError, Result};
pub use writer::{output_path, write_csv_table};
