//! Error types for the itunes-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. Search queries never appear in error
//! messages.
//!
//! Note that [`SearchController`](crate::SearchController) never returns
//! these from a search: a failed search yields an empty result set, and
//! the cause is only recorded for diagnostics.

/// Errors that can occur while configuring or running a search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The transport could not complete the HTTP exchange
    /// (connection refused, DNS failure, timeout, body read failure).
    #[error("transport error: {0}")]
    Transport(String),

    /// The transport completed without delivering a response body.
    #[error("response had no body")]
    MissingBody,

    /// The response body was not the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for itunes-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
