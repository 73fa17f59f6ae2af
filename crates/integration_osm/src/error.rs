//! OSM error types

use thiserror::Error;

/// Errors that can occur while talking to Nominatim or the tile servers
#[derive(Debug, Error)]
pub enum OsmError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Service answered with a non-success status
    #[error("Request failed: HTTP {status}")]
    RequestFailed {
        /// HTTP status code returned upstream
        status: u16,
    },

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl OsmError {
    /// Map a transport error, never keeping the request URL
    pub(crate) fn from_reqwest(e: reqwest::Error, timeout_secs: u64) -> Self {
        if e.is_timeout() {
            Self::Timeout { timeout_secs }
        } else if e.is_decode() {
            Self::ParseError(e.without_url().to_string())
        } else {
            Self::ConnectionFailed(e.without_url().to_string())
        }
    }

    /// Upstream HTTP status, if the service answered at all
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status } => Some(*status),
            _ => None,
        }
    }
}
