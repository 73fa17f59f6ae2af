//! API error handling
//!
//! Every error renders as `{success: false, error, code, details?}`.
//! Upstream and internal failures carry a fixed message; the underlying
//! cause goes into `details` only when the state allows it.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream error: {message}")]
    Upstream {
        status: StatusCode,
        message: &'static str,
        details: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal {
        message: &'static str,
        details: Option<String>,
    },
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    /// Error message
    pub error: String,
    /// Error code
    pub code: &'static str,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Map a service error; upstream failures become 500
    ///
    /// `failure` is the message shown for upstream and internal errors.
    pub fn from_application(
        err: ApplicationError,
        failure: &'static str,
        expose_details: bool,
    ) -> Self {
        Self::map(err, failure, expose_details, false)
    }

    /// Like [`Self::from_application`] but keeps an upstream 4xx/5xx status
    pub fn with_upstream_status(
        err: ApplicationError,
        failure: &'static str,
        expose_details: bool,
    ) -> Self {
        Self::map(err, failure, expose_details, true)
    }

    fn map(
        err: ApplicationError,
        failure: &'static str,
        expose_details: bool,
        propagate_status: bool,
    ) -> Self {
        let details = expose_details.then(|| err.to_string());
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::Validation(msg) => Self::BadRequest(msg),
            ApplicationError::NotFound(msg) => Self::NotFound(msg),
            ApplicationError::ExternalService { status, .. } => {
                let status = status
                    .filter(|_| propagate_status)
                    .and_then(|s| StatusCode::from_u16(s).ok())
                    .filter(|s| s.is_client_error() || s.is_server_error())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                Self::Upstream {
                    status,
                    message: failure,
                    details,
                }
            },
            ApplicationError::Configuration(_) => Self::Internal {
                message: failure,
                details,
            },
        }
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream { status, .. } => *status,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, error, details) = match self {
            Self::BadRequest(msg) => ("bad_request", msg, None),
            Self::NotFound(msg) => ("not_found", msg, None),
            Self::Upstream {
                message, details, ..
            } => ("upstream_error", message.to_string(), details),
            Self::Internal { message, details } => ("internal_error", message.to_string(), details),
        };

        if status.is_server_error() {
            tracing::error!(%status, code, error = %error, details = ?details, "Request failed");
        }

        let body = ErrorResponse {
            success: false,
            error,
            code,
            details,
        };

        (status, Json(body)).into_response()
    }
}
