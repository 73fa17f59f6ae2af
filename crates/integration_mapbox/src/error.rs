//! Mapbox error types

use thiserror::Error;

/// Errors that can occur during Mapbox operations
#[derive(Debug, Error)]
pub enum MapboxError {
    /// Connection to Mapbox failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Mapbox answered with a non-success status
    #[error("Request failed: HTTP {status}: {message}")]
    RequestFailed {
        /// HTTP status code returned by Mapbox
        status: u16,
        /// `message` field of the error body, or the status reason
        message: String,
    },

    /// Failed to parse the response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Directions found no route between the waypoints
    #[error("No route found ({code})")]
    NoRoute {
        /// Mapbox response code, e.g. `NoRoute` or `NoSegment`
        code: String,
    },

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

impl MapboxError {
    /// Map a transport error with the URL (and so the token) removed
    pub(crate) fn from_reqwest(e: reqwest::Error, timeout_secs: u64) -> Self {
        if e.is_timeout() {
            Self::Timeout { timeout_secs }
        } else if e.is_decode() {
            Self::ParseError(e.without_url().to_string())
        } else {
            Self::ConnectionFailed(e.without_url().to_string())
        }
    }

    /// Upstream HTTP status, if Mapbox answered
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
