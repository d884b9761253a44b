use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use csv::Writer;
use tracing::debug;

use eox_ingest::CsvTable;

use crate::error::{OutputError, Result};

/// Suffix appended to the input's file stem.
const OUTPUT_SUFFIX: &str = "_output";

/// Resolves where the report is written.
///
/// An explicit path wins; otherwise the report lands beside the input as
/// `<stem>_output.<ext>`, keeping the input's extension (`csv` when the
/// input has none).
pub fn output_path(input: &Path, explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let stem = input.file_stem().and_then(OsStr::to_str).unwrap_or("eox");
    let ext = input.extension().and_then(OsStr::to_str).unwrap_or("csv");
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.{ext}"))
}

/// Writes `table` to `path` as CSV, replacing any existing file.
pub fn write_csv_table(path: &Path, table: &CsvTable) -> Result<()> {
    let mut writer = Writer::from_path(path).map_err(|source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    writer
        .write_record(&table.headers)
        .map_err(|source| OutputError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    for row in &table.rows {
        writer.write_record(row).map_err(|source| OutputError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    }
    writer.flush().map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = table.rows.len(), "output table written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_sibling_output_path() {
        let path = output_path(Path::new("/data/inventory.csv"), None);
        assert_eq!(path, PathBuf::from("/data/inventory_output.csv"));
    }

    #[test]
    fn keeps_multi_dot_stems_and_foreign_extensions() {
        let path = output_path(Path::new("site.2024.txt"), None);
        assert_eq!(path, PathBuf::from("site.2024_output.txt"));
    }

    #[test]
    fn extensionless_input_gets_csv() {
        let path = output_path(Path::new("serials"), None);
        assert_eq!(path, PathBuf::from("serials_output.csv"));
    }

    #[test]
    fn explicit_path_wins() {
        let path = output_path(
            Path::new("inventory.csv"),
            Some(Path::new("/tmp/report.csv")),
        );
        assert_eq!(path, PathBuf::from("/tmp/report.csv"));
    }
}
