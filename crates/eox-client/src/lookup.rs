//! Batched serial-number lookup against the EoX support-tools API.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use eox_model::{EoxRecord, filter_serials};

use crate::error::{ClientError, Result};

/// EoX lookup endpoint; serials are appended comma-joined.
const EOX_BY_SERIAL_URL: &str =
    "https://apix.cisco.com/supporttools/eox/rest/5/EOXBySerialNumber/1/";

/// Maximum serials the lookup endpoint accepts in one call.
pub const MAX_SERIALS_PER_REQUEST: usize = 20;

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Response envelope of the lookup endpoint. `EOXRecord` is absent when no
/// serial in the batch matched, which is a zero-record answer, not an error.
#[derive(Debug, Default, Deserialize)]
struct EoxResponse {
    #[serde(rename = "EOXRecord", default)]
    records: Vec<EoxRecord>,
}

/// Client for the EoX lifecycle-lookup endpoint.
pub struct EoxClient {
    client: Client,
}

impl EoxClient {
    /// Creates a lookup client.
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client })
    }

    fn lookup_url(serials: &[String]) -> String {
        format!("{EOX_BY_SERIAL_URL}{}", serials.join(","))
    }

    /// Resolves one batch of at most [`MAX_SERIALS_PER_REQUEST`] serials.
    ///
    /// Entries that cannot be valid serials are dropped before the URL is
    /// built; a batch left empty by that filter still issues the request
    /// and comes back as zero records. Any error returned here covers only
    /// this batch — the caller decides whether to continue.
    pub fn lookup_by_serials(&self, token: &str, serials: &[String]) -> Result<Vec<EoxRecord>> {
        let filtered = filter_serials(serials);
        if filtered.len() < serials.len() {
            debug!(
                dropped = serials.len() - filtered.len(),
                "dropped entries that cannot be valid serials"
            );
        }

        let url = Self::lookup_url(&filtered);
        let response = self.client.get(&url).bearer_auth(token).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::LookupStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        let parsed: EoxResponse =
            serde_json::from_str(&body).map_err(ClientError::LookupResponse)?;
        debug!(
            requested = filtered.len(),
            returned = parsed.records.len(),
            "lookup batch complete"
        );
        Ok(parsed.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        assert!(EoxClient::new().is_ok());
    }

    #[test]
    fn lookup_url_joins_serials_with_commas() {
        let serials = vec!["SER1".to_string(), "SER2".to_string()];
        assert_eq!(
            EoxClient::lookup_url(&serials),
            "https://apix.cisco.com/supporttools/eox/rest/5/EOXBySerialNumber/1/SER1,SER2"
        );
    }

    #[test]
    fn response_without_record_field_is_zero_records() {
        let parsed: EoxResponse =
            serde_json::from_str(r#"{"PaginationResponseRecord":null}"#).expect("parse");
        assert!(parsed.records.is_empty());
    }

    #[test]
    fn response_records_are_extracted() {
        let body = r#"{
            "EOXRecord": [
                { "EOXInputValue": "SER1", "EndOfSaleDate": { "value": "2023-01-31" } },
                { "EOXInputValue": "SER2,SER3" }
            ]
        }"#;
        let parsed: EoxResponse = serde_json::from_str(body).expect("parse");
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[0].input_value, "SER1");
        assert_eq!(parsed.records[1].input_value, "SER2,SER3");
    }

    #[test]
    fn malformed_body_maps_to_lookup_response_error() {
        let error = serde_json::from_str::<EoxResponse>("not json")
            .map_err(ClientError::LookupResponse)
            .expect_err("should fail");
        assert!(matches!(error, ClientError::LookupResponse(_)));
    }
}
