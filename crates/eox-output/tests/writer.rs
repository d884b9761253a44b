use std::fs;

use eox_ingest::{CsvTable, read_csv_table};
use eox_output::write_csv_table;

#[test]
fn writes_and_overwrites_the_output_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("report.csv");

    let table = CsvTable {
        headers: vec!["Serial Number".to_string(), "End Of Sale Date".to_string()],
        rows: vec![vec!["ABC123".to_string(), "01/01/2023".to_string()]],
    };
    write_csv_table(&path, &table).expect("write table");
    let contents = fs::read_to_string(&path).expect("read back");
    assert_eq!(
        contents,
        "Serial Number,End Of Sale Date\nABC123,01/01/2023\n"
    );

    // A second run replaces the file instead of appending.
    let smaller = CsvTable {
        headers: vec!["Serial Number".to_string()],
        rows: Vec::new(),
    };
    write_csv_table(&path, &smaller).expect("rewrite table");
    let contents = fs::read_to_string(&path).expect("read back");
    assert_eq!(contents, "Serial Number\n");
}

#[test]
fn written_table_reads_back_identically() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("roundtrip.csv");

    let table = CsvTable {
        headers: vec!["Hostname".to_string(), "Notes".to_string()],
        rows: vec![
            vec!["sw-01".to_string(), "has, a comma".to_string()],
            vec!["sw-02".to_string(), "plain".to_string()],
        ],
    };
    write_csv_table(&path, &table).expect("write table");
    let read_back = read_csv_table(&path).expect("read table");
    assert_eq!(read_back, table);
}
