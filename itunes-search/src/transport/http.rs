//! Production transport backed by a shared [`reqwest::Client`].
//!
//! Non-2xx responses are not treated as errors here: the status goes into
//! [`ResponseMetadata`] and the body is delivered as-is, leaving the
//! decoder to reject whatever it cannot read.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use super::{ResponseMetadata, Transport, TransportResponse};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::request::HttpRequest;

/// User-Agent sent when the configuration does not override it.
pub const DEFAULT_USER_AGENT: &str = concat!("itunes-search/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] configured for the search endpoint.
///
/// The client has:
/// - Timeout from `config.timeout_seconds`
/// - `config.user_agent`, or [`DEFAULT_USER_AGENT`]
/// - At most 10 redirects
/// - gzip decompression
///
/// # Errors
///
/// Returns [`SearchError::Config`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    let ua = match config.user_agent {
        Some(ref custom) => custom.clone(),
        None => DEFAULT_USER_AGENT.to_owned(),
    };

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Config(format!("failed to build HTTP client: {e}")))
}

/// HTTP transport for the live search endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Wrap an existing client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build a transport configured from `config`. See [`build_client`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the client cannot be constructed.
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        build_client(config).map(Self::new)
    }
}

impl Default for HttpTransport {
    /// A transport with the timeout and User-Agent of [`SearchConfig::default`].
    fn default() -> Self {
        match build_client(&SearchConfig::default()) {
            Ok(client) => Self::new(client),
            Err(err) => {
                // The default config has a valid UA and a non-zero timeout, so
                // this only fails when the TLS backend cannot initialise, where
                // `Client::builder().build()` and `Client::new()` fail alike.
                tracing::error!(error = %err, "falling back to an unconfigured HTTP client");
                Self::new(reqwest::Client::new())
            }
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send_request(&self, request: &HttpRequest) -> TransportResponse {
        tracing::trace!(url = %request.url, "sending search request");

        let url = match request.parsed_url() {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(error = %err, "refusing to send malformed request");
                return TransportResponse::from_error(err);
            }
        };

        let response = match self
            .client
            .request(request.method.clone(), url)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "search request failed");
                return TransportResponse::from_error(SearchError::Transport(format!(
                    "request failed: {e}"
                )));
            }
        };

        let metadata = ResponseMetadata {
            status: response.status().as_u16(),
            url: response.url().clone(),
            content_type: response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned),
        };
        if !response.status().is_success() {
            tracing::debug!(status = metadata.status, "search endpoint returned non-success status");
        }

        match response.bytes().await {
            Ok(body) => {
                tracing::trace!(bytes = body.len(), "search response received");
                TransportResponse {
                    body: Some(body),
                    metadata: Some(metadata),
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "search response read failed");
                TransportResponse {
                    body: None,
                    metadata: Some(metadata),
                    error: Some(SearchError::Transport(format!("response read failed: {e}"))),
                }
            }
        }
    }
}
