//! HTTP fetch for the taproot analyzer.
//!
//! Provides the [`DocumentSource`] capability the scanner is written
//! against, plus the single blocking HTTP GET implementation used by the
//! CLI. The core never performs I/O itself; everything that can block or
//! fail over the network lives behind this seam.

use std::time::Duration;

/// User-Agent header sent with all requests.
///
/// Mimics a common desktop browser to avoid basic bot detection.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default request timeout.
const TIMEOUT: Duration = Duration::from_secs(30);

/// Any failure to obtain document content.
///
/// The analyzer does not distinguish failure subtypes in its output (an
/// unreachable host, a 404, and a timeout all print the same diagnostic),
/// but the variants keep the underlying cause available for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or timed out.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),

    /// The response body could not be read or decoded.
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Capability for retrieving a document's content.
///
/// The scanning core consumes this trait and nothing else, so it can be
/// exercised with in-memory sources in tests while the CLI plugs in
/// [`HttpSource`].
pub trait DocumentSource {
    /// Fetch the document at `url` and return its body as text.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError`] if the document cannot be obtained for
    /// any reason. Callers treat all failures uniformly.
    fn fetch(&self, url: &str) -> Result<String, RetrievalError>;
}

/// Blocking HTTP GET retrieval.
#[derive(Debug, Clone)]
pub struct HttpSource {
    timeout: Duration,
}

impl HttpSource {
    /// Create a source with the default timeout.
    #[must_use]
    pub const fn new() -> Self {
        Self { timeout: TIMEOUT }
    }

    /// Create a source with a custom timeout (used by tests against slow
    /// or unreachable hosts).
    #[must_use]
    pub const fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String, RetrievalError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(RetrievalError::Client)?;

        let response = client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .map_err(RetrievalError::Request)?;

        if !response.status().is_success() {
            return Err(RetrievalError::Status(response.status()));
        }

        response.text().map_err(RetrievalError::Body)
    }
}
