//! OAuth2 client-credentials token exchange.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Cisco identity token endpoint.
const TOKEN_URL: &str = "https://id.cisco.com/oauth2/default/v1/token";

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Client for the OAuth2 client-credentials grant.
///
/// A valid token is a precondition for every lookup call, so any failure
/// here aborts the run; there is no retry and no fallback.
pub struct AuthClient {
    client: Client,
    client_id: String,
    client_secret: String,
}

impl AuthClient {
    /// Creates an auth client for the given API-console application.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        })
    }

    /// Exchanges the configured credentials for a bearer token.
    pub fn request_token(&self) -> Result<String> {
        debug!("requesting access token");
        let params = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("grant_type", "client_credentials"),
        ];
        let response = self.client.post(TOKEN_URL).form(&params).send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "unreadable response body".to_string());
            return Err(ClientError::TokenRequest {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text()?;
        let token: TokenResponse =
            serde_json::from_str(&body).map_err(ClientError::TokenResponse)?;
        debug!("obtained access token");
        Ok(token.access_token)
    }
}
