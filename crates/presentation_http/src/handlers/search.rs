//! Place search handler

use axum::{
    Json,
    extract::{Query, State},
};
use domain::PlaceResult;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::parse_limit;
use crate::{error::ApiError, state::AppState};

/// Query string shared by search and geocoding
#[derive(Debug, Default, Deserialize)]
pub struct PlaceParams {
    pub q: Option<String>,
    /// Kept as text so a malformed value falls back to the default
    pub limit: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub query: String,
    pub results: Vec<PlaceResult>,
    pub attribution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Search places, falling back across providers
#[instrument(skip(state))]
pub async fn search_places(
    State(state): State<AppState>,
    Query(params): Query<PlaceParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = params.q.unwrap_or_default();
    let outcome = state
        .search_service
        .search(
            &query,
            parse_limit(params.limit.as_deref()),
            params.country.as_deref(),
        )
        .await
        .map_err(|e| ApiError::from_application(e, "Search failed", state.expose_error_details))?;

    Ok(Json(SearchResponse {
        success: true,
        query: query.trim().to_string(),
        results: outcome.results,
        attribution: outcome.attribution,
        source: outcome.source,
    }))
}
