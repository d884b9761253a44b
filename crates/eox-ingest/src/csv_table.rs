use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// An ordered table of string cells read from the input CSV.
///
/// Every cell is kept as text; values the pipeline does not touch pass
/// through to the output unmodified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of the first header matching `name` case-insensitively.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name.trim()))
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads `path` into a [`CsvTable`].
///
/// The first non-empty record is the header row; data rows are padded or
/// truncated to the header width so downstream column indexing is total.
/// Fully empty records are skipped.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        match &headers {
            None => {
                headers = Some(record.iter().map(normalize_header).collect());
            }
            Some(header_row) => {
                let mut row = Vec::with_capacity(header_row.len());
                for idx in 0..header_row.len() {
                    let value = record.get(idx).unwrap_or("");
                    row.push(normalize_cell(value));
                }
                rows.push(row);
            }
        }
    }

    let headers = headers.unwrap_or_default();
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "input table loaded"
    );
    Ok(CsvTable { headers, rows })
}

/// Resolves the serial-number column, failing with
/// [`IngestError::MissingColumn`] when the header row does not carry it.
pub fn serial_column_index(table: &CsvTable, column: &str) -> Result<usize> {
    table
        .column_index(column)
        .ok_or_else(|| IngestError::MissingColumn {
            column: column.to_string(),
        })
}

/// The ordered serial values of the given column, one per data row.
///
/// Blank cells are kept so that batch arithmetic matches the row count; the
/// lookup client drops anything that cannot be a valid serial.
pub fn serial_values(table: &CsvTable, serial_idx: usize) -> Vec<String> {
    table
        .rows
        .iter()
        .map(|row| row.get(serial_idx).cloned().unwrap_or_default())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_index_is_case_insensitive() {
        let table = CsvTable {
            headers: vec!["Hostname".to_string(), "Serial Number".to_string()],
            rows: Vec::new(),
        };
        assert_eq!(table.column_index("serial number"), Some(1));
        assert_eq!(table.column_index("SERIAL NUMBER"), Some(1));
        assert_eq!(table.column_index("Asset Tag"), None);
    }

    #[test]
    fn normalize_header_collapses_whitespace() {
        assert_eq!(normalize_header("  Serial   Number "), "Serial Number");
        assert_eq!(normalize_header("\u{feff}Hostname"), "Hostname");
    }
}
