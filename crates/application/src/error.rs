//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Caller input missing or malformed
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The provider answered but had nothing for the request
    #[error("Not found: {0}")]
    NotFound(String),

    /// Upstream provider failed (network, non-2xx, malformed payload)
    #[error("{provider} error: {message}")]
    ExternalService {
        /// Provider name, e.g. `mapbox`
        provider: String,
        /// HTTP status returned by the provider, when one was received
        status: Option<u16>,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Upstream failure without an HTTP status
    pub fn external(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalService {
            provider: provider.into(),
            status: None,
            message: message.into(),
        }
    }

    /// Upstream failure carrying the provider's HTTP status
    pub fn external_status(
        provider: impl Into<String>,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        Self::ExternalService {
            provider: provider.into(),
            status: Some(status),
            message: message.into(),
        }
    }

    /// Missing required request parameter
    pub fn missing_parameter(name: &str) -> Self {
        Self::Validation(format!("Missing required parameter '{name}'"))
    }

    /// HTTP status reported by the upstream provider, if any
    pub const fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::ExternalService { status, .. } => *status,
            _ => None,
        }
    }
}
