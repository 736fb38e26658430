//! Configured HTTP client for checker round trips
//!
//! One validate call maps to one round trip. The checker answering with a
//! non-success status or the request failing outright both surface as
//! ordinary `CheckOutcome` values so the validator can absorb them into a
//! synthetic `network-error` message.

use std::error::Error as StdError;
use std::time::Duration;

use reqwest::Client as ReqwestClient;
use tracing::debug;

use crate::error::{Error, Result};
use crate::http::RequestBuilder;
use crate::types::ValidateRequest;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Whether to validate TLS certificates
    pub validate_tls: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            validate_tls: true,
        }
    }
}

/// Raw result of one checker round trip
#[derive(Debug, Clone)]
pub struct CheckResponse {
    /// HTTP status code
    pub status: u16,
    /// Canonical reason phrase for the status
    pub status_text: String,
    /// Final request URL
    pub url: String,
    /// Raw response body
    pub body: String,
}

impl CheckResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level failure: the request never completed
#[derive(Debug, Clone)]
pub struct TransportFailure {
    /// Request URL
    pub url: String,
    /// Error description, including the underlying cause
    pub detail: String,
}

/// Outcome of dispatching one checker request
#[derive(Debug, Clone)]
pub enum CheckOutcome {
    /// The checker answered; the body may still describe failures
    Response(CheckResponse),
    /// The request never completed (connection error, timeout)
    Failed(TransportFailure),
}

/// HTTP client for checker communication
pub struct HttpClient {
    client: ReqwestClient,
    request_builder: RequestBuilder,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(!config.validate_tls)
            .build()
            .map_err(|e| Error::HttpRequest {
                message: format!("failed to create HTTP client: {}", e),
                source: Some(anyhow::Error::new(e)),
            })?;
        Ok(Self {
            request_builder: RequestBuilder::new(client.clone()),
            client,
        })
    }

    /// Create with default configuration
    pub fn with_default_config() -> Result<Self> {
        Self::new(HttpClientConfig::default())
    }

    /// Dispatch one checker request, capturing the status and raw body.
    ///
    /// Only request construction can fail here; transport failures are
    /// returned as `CheckOutcome::Failed`.
    pub async fn execute(
        &self,
        request: &ValidateRequest,
        input_html: Option<&str>,
    ) -> Result<CheckOutcome> {
        let http_request = self.request_builder.build(request, input_html)?;
        let url = http_request.url().to_string();
        debug!(method = %http_request.method(), %url, "dispatching checker request");

        match self.client.execute(http_request).await {
            Ok(response) => {
                let status = response.status();
                let status_text = status.canonical_reason().unwrap_or_default().to_string();
                let url = response.url().to_string();
                let body = response.text().await.unwrap_or_default();
                debug!(status = status.as_u16(), bytes = body.len(), "checker responded");
                Ok(CheckOutcome::Response(CheckResponse {
                    status: status.as_u16(),
                    status_text,
                    url,
                    body,
                }))
            }
            Err(err) => {
                let detail = match err.source() {
                    Some(source) => format!("{}: {}", err, source),
                    None => err.to_string(),
                };
                debug!(%url, %detail, "checker request failed");
                Ok(CheckOutcome::Failed(TransportFailure { url, detail }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = HttpClientConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert!(config.validate_tls);
    }

    #[test]
    fn test_client_creation() {
        assert!(HttpClient::with_default_config().is_ok());
    }

    #[test]
    fn test_success_range() {
        let mut response = CheckResponse {
            status: 200,
            status_text: "OK".to_string(),
            url: "https://validator.w3.org/nu/?out=json".to_string(),
            body: String::new(),
        };
        assert!(response.is_success());
        response.status = 503;
        assert!(!response.is_success());
    }
}
