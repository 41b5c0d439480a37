//! Scripted transport for deterministic tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use super::{ResponseMetadata, Transport, TransportResponse};
use crate::error::SearchError;
use crate::request::HttpRequest;

/// Delay before a [`MockTransport`] completes, standing in for network latency.
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(5);

/// A transport that replays the same canned response on every call.
///
/// Records the last request it was given so tests can assert on the URL
/// the controller built. Share it through an `Arc` to keep a handle after
/// installing it on a controller.
#[derive(Debug)]
pub struct MockTransport {
    body: Option<Bytes>,
    metadata: Option<ResponseMetadata>,
    error: Option<SearchError>,
    delay: Duration,
    last_request: Mutex<Option<HttpRequest>>,
    calls: AtomicUsize,
}

impl MockTransport {
    /// Build a mock from the three parts it will report.
    pub fn new(
        body: Option<Bytes>,
        metadata: Option<ResponseMetadata>,
        error: Option<SearchError>,
    ) -> Self {
        Self {
            body,
            metadata,
            error,
            delay: DEFAULT_MOCK_DELAY,
            last_request: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// A mock that answers every request with `body`.
    pub fn with_body(body: impl Into<Bytes>) -> Self {
        Self::new(Some(body.into()), None, None)
    }

    /// A mock whose every request fails with `error` and no body.
    pub fn failing(error: SearchError) -> Self {
        Self::new(None, None, Some(error))
    }

    /// A mock that completes with neither body nor error.
    pub fn empty() -> Self {
        Self::new(None, None, None)
    }

    /// Override the simulated latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The most recent request this mock received.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.last_request
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// How many times [`Transport::send_request`] has been called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send_request(&self, request: &HttpRequest) -> TransportResponse {
        *self.last_request.lock().unwrap_or_else(|e| e.into_inner()) = Some(request.clone());
        self.calls.fetch_add(1, Ordering::SeqCst);

        tokio::time::sleep(self.delay).await;

        TransportResponse {
            body: self.body.clone(),
            metadata: self.metadata.clone(),
            error: self.error.clone(),
        }
    }
}
