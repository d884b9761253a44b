//! Left-preserving join of lifecycle records onto the input table.

use std::collections::HashMap;
use std::iter;

use eox_ingest::CsvTable;
use eox_model::{DATE_COLUMNS, LifecycleDates};

/// Joins `records` onto `table` by the serial column at `serial_idx`.
///
/// The five date columns are appended to the header row. Every input row is
/// kept in order; a row whose serial matched nothing gets empty date cells.
/// If several records carry the same serial the row is repeated once per
/// record, in record order (normalization produces one record per serial,
/// so repeats indicate duplicate vendor answers).
pub fn left_join_dates(
    table: &CsvTable,
    serial_idx: usize,
    records: &[LifecycleDates],
) -> CsvTable {
    let mut by_serial: HashMap<&str, Vec<&LifecycleDates>> = HashMap::new();
    for record in records {
        by_serial
            .entry(record.serial.as_str())
            .or_default()
            .push(record);
    }

    let mut headers = table.headers.clone();
    headers.extend(DATE_COLUMNS.iter().map(|column| column.header.to_string()));

    let mut rows = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let serial = row.get(serial_idx).map(String::as_str).unwrap_or("");
        match by_serial.get(serial) {
            Some(matches) => {
                for matched in matches {
                    let mut out = row.clone();
                    out.extend(matched.dates.iter().cloned());
                    rows.push(out);
                }
            }
            None => {
                let mut out = row.clone();
                out.extend(iter::repeat_n(String::new(), DATE_COLUMNS.len()));
                rows.push(out);
            }
        }
    }

    CsvTable { headers, rows }
}
