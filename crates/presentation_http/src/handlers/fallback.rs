//! Unknown API route handler

use axum::{Json, extract::OriginalUri, http::StatusCode};
use serde::Serialize;

use super::API_ENDPOINTS;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundResponse {
    pub success: bool,
    pub error: String,
    pub code: &'static str,
    pub available_routes: &'static [&'static str],
}

/// 404 for any `/api` path without a route
pub async fn api_not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<NotFoundResponse>) {
    tracing::debug!(path = %uri.path(), "Unknown API route");
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            success: false,
            error: format!("API route not found: {}", uri.path()),
            code: "not_found",
            available_routes: API_ENDPOINTS,
        }),
    )
}
