//! Input-table ingestion for the EoX report pipeline.
//!
//! Reads the user's spreadsheet-style CSV into a [`CsvTable`] of normalized
//! string cells and resolves the serial-number column. Everything here fails
//! before any network call is made, so a bad input never costs API quota.

pub mod csv_table;
pub mod error;

pub use csv_table::{CsvTable, read_csv_table, serial_column_index, serial_values};
pub use error::{IngestError, Result};
