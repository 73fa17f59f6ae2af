//! Forward geocoding handler

use axum::{
    Json,
    extract::{Query, State},
};
use tracing::instrument;

use super::{
    parse_limit,
    search::{PlaceParams, SearchResponse},
};
use crate::{error::ApiError, state::AppState};

/// Geocode free text through Mapbox
///
/// Unlike search there is no fallback, and an upstream error status is
/// passed through to the caller.
#[instrument(skip(state))]
pub async fn geocode(
    State(state): State<AppState>,
    Query(params): Query<PlaceParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = params.q.unwrap_or_default();
    let outcome = state
        .geocode_service
        .geocode(
            &query,
            parse_limit(params.limit.as_deref()),
            params.country.as_deref(),
        )
        .await
        .map_err(|e| {
            ApiError::with_upstream_status(e, "Geocoding failed", state.expose_error_details)
        })?;

    Ok(Json(SearchResponse {
        success: true,
        query: query.trim().to_string(),
        results: outcome.results,
        attribution: outcome.attribution,
        source: outcome.source,
    }))
}
