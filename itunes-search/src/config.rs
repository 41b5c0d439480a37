//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls the endpoint, timeout and User-Agent of the
//! production transport, and the category used when a caller does not
//! pick one. It can be loaded from TOML; missing keys fall back to
//! [`Default`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SearchError;
use crate::request::DEFAULT_ENDPOINT;
use crate::types::Category;

/// Configuration for a [`SearchController`](crate::SearchController).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search endpoint URL. `term` and `entity` are appended to it.
    pub endpoint: String,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, the crate's own is used.
    pub user_agent: Option<String>,
    /// Category used when the caller does not specify one.
    pub default_category: Category,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout_seconds: 8,
            user_agent: None,
            default_category: Category::Software,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `endpoint` must parse as an `http` or `https` URL
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        self.endpoint_url().map(|_| ())
    }

    /// Parse [`SearchConfig::endpoint`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the endpoint is not a valid
    /// `http`/`https` URL.
    pub fn endpoint_url(&self) -> Result<Url, SearchError> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| SearchError::Config(format!("invalid endpoint: {e}")))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(SearchError::Config(format!(
                "endpoint scheme must be http or https, got {other}"
            ))),
        }
    }

    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the text is not valid TOML or a
    /// field has the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self, SearchError> {
        toml::from_str(text).map_err(|e| SearchError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, SearchError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SearchError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }
}
