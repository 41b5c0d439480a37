//! # itunes-search
//!
//! A typed client for the iTunes Search API.
//!
//! Given a free-text query and a [`Category`], a [`SearchController`]
//! builds a `GET` request against the search endpoint, sends it through a
//! [`Transport`], decodes the JSON response into [`SearchResult`]s, and
//! keeps them as its current result set.
//!
//! ## Design
//!
//! - The transport is a one-method trait held as `Arc<dyn Transport>`, so
//!   the live [`HttpTransport`] can be swapped for a [`MockTransport`]
//!   between searches
//! - Request building and response decoding are pure functions
//! - Decoding is tolerant: any malformed payload yields no results
//! - Failures never surface from a search. The result set goes empty and
//!   the cause is available from [`SearchController::last_error`]
//!
//! ## Privacy
//!
//! - Search queries are logged only at trace level
//! - No credentials are sent or stored

pub mod config;
pub mod controller;
pub mod decode;
pub mod error;
pub mod request;
pub mod transport;
pub mod types;

pub use config::SearchConfig;
pub use controller::SearchController;
pub use decode::decode_results;
pub use error::{Result, SearchError};
pub use request::{build_request, HttpRequest};
pub use transport::{HttpTransport, MockTransport, ResponseMetadata, Transport, TransportResponse};
pub use types::{Category, SearchRequest, SearchResult};

/// Run a single search with the given configuration.
///
/// Convenience wrapper that builds a [`SearchController`] from `config`,
/// performs one search, and returns its results.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid. A failed search
/// is not an error; it yields an empty list.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> itunes_search::Result<()> {
/// use itunes_search::{Category, SearchConfig};
///
/// let results = itunes_search::search("GarageBand", Category::Software, &SearchConfig::default()).await?;
/// for result in &results {
///     println!("{} by {}", result.title, result.artist);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(
    query: &str,
    category: Category,
    config: &SearchConfig,
) -> Result<Vec<SearchResult>> {
    let mut controller = SearchController::from_config(config)?;
    Ok(controller.perform_search(query, category).await.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_validates_config_zero_timeout() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let result = search("test", Category::Software, &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));
    }

    #[tokio::test]
    async fn search_validates_config_endpoint() {
        let config = SearchConfig {
            endpoint: "itunes.apple.com/search".into(),
            ..Default::default()
        };
        let result = search("test", Category::Software, &config).await;
        assert!(result.unwrap_err().to_string().contains("endpoint"));
    }
}
