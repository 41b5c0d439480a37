//! Search controller: owns the current result set and drives one search
//! at a time through a swappable [`Transport`].
//!
//! # Pipeline
//!
//! 1. Build the request for `(query, category)`
//! 2. Send it through the installed transport (exactly once, no retry)
//! 3. A transport error or missing body means no data; otherwise decode
//! 4. Replace the result set wholesale
//! 5. Signal completion
//!
//! Every failure degrades to an empty result set. The cause is kept in
//! [`SearchController::last_error`] for callers that want to tell "no
//! matches" apart from "network down".

use std::fmt;
use std::sync::Arc;

use crate::config::SearchConfig;
use crate::decode::try_decode_results;
use crate::error::SearchError;
use crate::request::{build_request_for, DEFAULT_ENDPOINT};
use crate::transport::{HttpTransport, Transport, TransportResponse};
use crate::types::{Category, SearchResult};

/// Runs searches and holds the results of the most recent one.
///
/// Searches borrow the controller mutably, so two searches on the same
/// controller can never overlap.
pub struct SearchController {
    transport: Arc<dyn Transport>,
    endpoint: String,
    results: Vec<SearchResult>,
    last_error: Option<SearchError>,
}

impl SearchController {
    /// A controller using the default HTTP transport and endpoint.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(HttpTransport::default()))
    }

    /// A controller that sends its requests through `transport`.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            results: Vec::new(),
            last_error: None,
        }
    }

    /// A controller with an HTTP transport and endpoint taken from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` fails validation or the
    /// HTTP client cannot be built.
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let endpoint = config.endpoint_url()?;
        let transport = HttpTransport::from_config(config)?;
        Ok(Self::with_transport(Arc::new(transport)).with_endpoint(endpoint.as_str()))
    }

    /// Send requests to `endpoint` instead of the default.
    ///
    /// The endpoint is not validated here; a malformed one makes every
    /// search fail with a transport error.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replace the transport used by subsequent searches.
    pub fn set_transport(&mut self, transport: Arc<dyn Transport>) {
        self.transport = transport;
    }

    /// The transport used by the next search.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// The endpoint requests are built against.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Results of the most recently completed search.
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Why the most recently completed search produced no data, if it failed.
    ///
    /// `None` after a search whose payload decoded, including one that
    /// decoded to zero results.
    pub fn last_error(&self) -> Option<&SearchError> {
        self.last_error.as_ref()
    }

    /// Search for `query` in `category` and replace the result set.
    ///
    /// Never fails: transport errors, missing bodies and malformed
    /// payloads all leave the result set empty.
    pub async fn perform_search(&mut self, query: &str, category: Category) -> &[SearchResult] {
        tracing::trace!(query, %category, "performing search");

        let request = build_request_for(&self.endpoint, query, category);
        let response = self.transport.send_request(&request).await;

        let (results, error) = interpret(response);
        match &error {
            Some(err) => tracing::debug!(error = %err, "search produced no data"),
            None => tracing::debug!(count = results.len(), %category, "search completed"),
        }

        self.results = results;
        self.last_error = error;
        &self.results
    }

    /// Like [`perform_search`](Self::perform_search), then calls
    /// `on_complete` exactly once with the updated controller.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example() {
    /// use itunes_search::{Category, SearchController};
    ///
    /// let mut controller = SearchController::new();
    /// controller
    ///     .perform_search_with("GarageBand", Category::Software, |c| {
    ///         println!("{} results", c.results().len());
    ///     })
    ///     .await;
    /// # }
    /// ```
    pub async fn perform_search_with<F>(&mut self, query: &str, category: Category, on_complete: F)
    where
        F: FnOnce(&SearchController),
    {
        self.perform_search(query, category).await;
        on_complete(self);
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SearchController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchController")
            .field("endpoint", &self.endpoint)
            .field("results", &self.results.len())
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}

/// Map a transport response onto the new result set and its failure cause.
fn interpret(response: TransportResponse) -> (Vec<SearchResult>, Option<SearchError>) {
    if let Some(err) = response.error {
        return (Vec::new(), Some(err));
    }
    let Some(body) = response.body else {
        return (Vec::new(), Some(SearchError::MissingBody));
    };
    match try_decode_results(&body) {
        Ok(results) => (results, None),
        Err(err) => (Vec::new(), Some(err)),
    }
}
