//! Health check handler

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;

use super::API_ENDPOINTS;
use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// RFC 3339 timestamp
    pub timestamp: String,
    pub provider_configured: bool,
    /// `configured` or `missing`
    pub mapbox: &'static str,
    pub endpoints: &'static [&'static str],
}

/// Liveness check; never calls a provider
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "Gbaka Guides API",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().to_rfc3339(),
        provider_configured: state.provider_configured,
        mapbox: if state.provider_configured {
            "configured"
        } else {
            "missing"
        },
        endpoints: API_ENDPOINTS,
    })
}
