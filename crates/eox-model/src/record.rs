//! Wire types for the EoX lookup response and the normalized per-serial record.

use serde::Deserialize;

/// A single lifecycle milestone as returned by the lookup API.
///
/// The API wraps every date in an object; `value` is either `YYYY-MM-DD` or
/// the empty string when the milestone has not been announced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DateValue {
    #[serde(default)]
    pub value: String,
}

/// One lifecycle entry from the lookup response.
///
/// A single entry may answer for several requested serials; `input_value`
/// carries them comma-delimited. Fields the report does not use are ignored
/// at deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EoxRecord {
    #[serde(rename = "EOXInputValue", default)]
    pub input_value: String,
    #[serde(rename = "EndOfSaleDate")]
    pub end_of_sale: Option<DateValue>,
    #[serde(rename = "EndOfSWMaintenanceReleases")]
    pub end_of_sw_maintenance: Option<DateValue>,
    #[serde(rename = "EndOfRoutineFailureAnalysisDate")]
    pub end_of_routine_failure_analysis: Option<DateValue>,
    #[serde(rename = "EndOfSecurityVulSupportDate")]
    pub end_of_security_vul_support: Option<DateValue>,
    #[serde(rename = "LastDateOfSupport")]
    pub last_date_of_support: Option<DateValue>,
}

/// Mapping from a raw API date field to the output column it feeds.
pub struct DateColumn {
    /// Column header written to the output table.
    pub header: &'static str,
    /// Raw API field name, used in diagnostics.
    pub field: &'static str,
    /// Accessor for the field on a record.
    pub value: fn(&EoxRecord) -> Option<&DateValue>,
}

/// The five milestones carried into the output, in column order.
///
/// Adding a milestone means adding a row here (and a field on
/// [`EoxRecord`]); the normalizer and the join iterate this table instead of
/// naming fields.
pub const DATE_COLUMNS: [DateColumn; 5] = [
    DateColumn {
        header: "End Of Sale Date",
        field: "EndOfSaleDate",
        value: |record| record.end_of_sale.as_ref(),
    },
    DateColumn {
        header: "End Of SW Maintenance Releases",
        field: "EndOfSWMaintenanceReleases",
        value: |record| record.end_of_sw_maintenance.as_ref(),
    },
    DateColumn {
        header: "End Of Routine Failure Analysis Date",
        field: "EndOfRoutineFailureAnalysisDate",
        value: |record| record.end_of_routine_failure_analysis.as_ref(),
    },
    DateColumn {
        header: "End Of Security Vulnerability Support Date",
        field: "EndOfSecurityVulSupportDate",
        value: |record| record.end_of_security_vul_support.as_ref(),
    },
    DateColumn {
        header: "Last Date Of Support",
        field: "LastDateOfSupport",
        value: |record| record.last_date_of_support.as_ref(),
    },
];

/// Lifecycle dates for one serial, ready to join onto the input table.
///
/// `dates` is indexed in [`DATE_COLUMNS`] order. Invariant: a milestone the
/// vendor did not report is the empty string, never absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleDates {
    pub serial: String,
    pub dates: [String; 5],
}

impl LifecycleDates {
    /// A record for `serial` with every milestone empty.
    pub fn empty(serial: impl Into<String>) -> Self {
        Self {
            serial: serial.into(),
            dates: std::array::from_fn(|_| String::new()),
        }
    }
}
