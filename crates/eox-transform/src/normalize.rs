//! Normalization of vendor lifecycle records into one flat record per serial.

use chrono::NaiveDate;

use eox_model::{DATE_COLUMNS, EoxRecord, LifecycleDates};

use crate::error::{Result, TransformError};

/// Reformats a vendor date from `YYYY-MM-DD` to `MM/DD/YYYY`.
///
/// Deterministic and total over well-formed inputs; anything else is a
/// [`TransformError::DateFormat`] naming `field`.
pub fn reformat_date(field: &'static str, raw: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|source| {
        TransformError::DateFormat {
            field,
            value: raw.to_string(),
            source,
        }
    })?;
    Ok(date.format("%m/%d/%Y").to_string())
}

/// Expands raw lookup records into one [`LifecycleDates`] per serial.
///
/// A record's `EOXInputValue` names every requested serial it answers for,
/// comma-delimited; each gets its own output record with identical dates.
/// Output order follows the input records, serials in listed order; nothing
/// is deduplicated across batches. A milestone that is absent or reported
/// with an empty value stays the empty string.
pub fn normalize_records(records: &[EoxRecord]) -> Result<Vec<LifecycleDates>> {
    let mut normalized = Vec::new();
    for record in records {
        let mut dates: [String; 5] = std::array::from_fn(|_| String::new());
        for (slot, column) in DATE_COLUMNS.iter().enumerate() {
            if let Some(date) = (column.value)(record) {
                if !date.value.is_empty() {
                    dates[slot] = reformat_date(column.field, &date.value)?;
                }
            }
        }
        for serial in record.input_value.split(',') {
            normalized.push(LifecycleDates {
                serial: serial.to_string(),
                dates: dates.clone(),
            });
        }
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(body: &str) -> EoxRecord {
        serde_json::from_str(body).expect("parse record fixture")
    }

    #[test]
    fn reformats_iso_dates() {
        assert_eq!(
            reformat_date("EndOfSaleDate", "2024-03-15").expect("reformat"),
            "03/15/2024"
        );
        assert_eq!(
            reformat_date("EndOfSaleDate", "1999-12-01").expect("reformat"),
            "12/01/1999"
        );
    }

    #[test]
    fn bad_date_is_fatal_and_names_the_field() {
        let error = reformat_date("LastDateOfSupport", "03/15/2024").expect_err("should fail");
        let TransformError::DateFormat { field, value, .. } = error else {
            panic!("unexpected error variant");
        };
        assert_eq!(field, "LastDateOfSupport");
        assert_eq!(value, "03/15/2024");
    }

    #[test]
    fn record_with_one_date_leaves_other_slots_empty() {
        let records = [record(
            r#"{ "EOXInputValue": "ABC123", "EndOfSaleDate": { "value": "2023-01-01" } }"#,
        )];
        let normalized = normalize_records(&records).expect("normalize");
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].serial, "ABC123");
        assert_eq!(normalized[0].dates[0], "01/01/2023");
        assert!(normalized[0].dates[1..].iter().all(String::is_empty));
    }

    #[test]
    fn empty_value_objects_count_as_absent() {
        let records = [record(
            r#"{
                "EOXInputValue": "ABC123",
                "EndOfSaleDate": { "value": "" },
                "LastDateOfSupport": { "value": "" }
            }"#,
        )];
        let normalized = normalize_records(&records).expect("normalize");
        assert!(normalized[0].dates.iter().all(String::is_empty));
    }

    #[test]
    fn multi_serial_record_fans_out_with_identical_dates() {
        let records = [record(
            r#"{ "EOXInputValue": "SER1,SER2", "LastDateOfSupport": { "value": "2030-06-30" } }"#,
        )];
        let normalized = normalize_records(&records).expect("normalize");
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].serial, "SER1");
        assert_eq!(normalized[1].serial, "SER2");
        assert_eq!(normalized[0].dates, normalized[1].dates);
        assert_eq!(normalized[0].dates[4], "06/30/2030");
    }

    #[test]
    fn output_follows_record_then_serial_order() {
        let records = [
            record(r#"{ "EOXInputValue": "B1,B2" }"#),
            record(r#"{ "EOXInputValue": "A1" }"#),
        ];
        let serials: Vec<String> = normalize_records(&records)
            .expect("normalize")
            .into_iter()
            .map(|entry| entry.serial)
            .collect();
        assert_eq!(serials, vec!["B1", "B2", "A1"]);
    }
}
