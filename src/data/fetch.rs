use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::ACCEPT;

/// Error raised while fetching a JSON document over HTTP.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// The connection could not be established or the request failed in
    /// transit.
    Connection(String),
    /// The server answered with a non-200 status.
    Status(u16),
    /// The response body could not be fully read.
    Read(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Connection(msg) => write!(f, "connection failed: {}", msg),
            FetchError::Status(code) => write!(f, "unexpected HTTP status {}", code),
            FetchError::Read(msg) => write!(f, "failed to read response body: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Fetches the raw JSON body behind a URL. The trait seam exists so the
/// exchange orchestration can be tested against a spy without a network.
pub trait JsonFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking HTTP implementation of [`JsonFetcher`]. Issues a plain GET with
/// an `Accept: application/json` header. No retries; callers wrap their own
/// policy if they need one.
pub struct HttpJsonFetcher {
    client: reqwest::blocking::Client,
}

impl HttpJsonFetcher {
    pub fn new(timeout_ms: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                log::warn!("falling back to default HTTP client: {}", err);
                reqwest::blocking::Client::new()
            });
        Self { client }
    }
}

impl JsonFetcher for HttpJsonFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        #[cfg(debug_assertions)]
        if crate::config::DEBUG_FLAGS.print_fetch_urls {
            log::info!("GET {}", url);
        }

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.text().map_err(|e| FetchError::Read(e.to_string()))
    }
}
