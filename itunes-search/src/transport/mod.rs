//! Trait definition for the pluggable transport behind a search.
//!
//! The [`SearchController`](crate::SearchController) never talks to the
//! network directly. It hands a built [`HttpRequest`] to a [`Transport`]
//! and receives whatever came back. [`HttpTransport`] does this with
//! `reqwest`; [`MockTransport`] replays canned data for tests.

pub mod http;
pub mod mock;

pub use http::HttpTransport;
pub use mock::MockTransport;

use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use crate::error::SearchError;
use crate::request::HttpRequest;

/// Response metadata reported alongside the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMetadata {
    /// HTTP status code.
    pub status: u16,
    /// Final URL after redirects.
    pub url: Url,
    /// `Content-Type` header, if present.
    pub content_type: Option<String>,
}

/// Everything a transport reports for one request.
///
/// The three parts are independent: a transport may report an error and
/// no body, a body with metadata and no error, or any other combination.
/// The controller treats a present `error` or an absent `body` as "no
/// data".
#[derive(Debug, Clone, Default)]
pub struct TransportResponse {
    pub body: Option<Bytes>,
    pub metadata: Option<ResponseMetadata>,
    pub error: Option<SearchError>,
}

impl TransportResponse {
    /// A response carrying only a transport error.
    pub fn from_error(error: SearchError) -> Self {
        Self {
            body: None,
            metadata: None,
            error: Some(error),
        }
    }
}

/// A pluggable request executor.
///
/// Implementations perform one HTTP exchange per call and must not retry.
/// Failures are reported inside the [`TransportResponse`] rather than as a
/// `Result`, so every call completes with a value.
///
/// All implementations must be `Send + Sync` so a controller holding an
/// `Arc<dyn Transport>` can be moved across tasks.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute `request` and report what came back.
    async fn send_request(&self, request: &HttpRequest) -> TransportResponse;
}
