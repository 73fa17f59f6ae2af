//! Directions handler

use axum::{
    Json,
    extract::{Query, State},
};
use domain::RouteResult;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct DirectionsParams {
    /// `lon,lat`
    pub from: Option<String>,
    /// `lon,lat`
    pub to: Option<String>,
    pub profile: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DirectionsResponse {
    pub success: bool,
    #[serde(flatten)]
    pub result: RouteResult,
}

#[instrument(skip(state))]
pub async fn directions(
    State(state): State<AppState>,
    Query(params): Query<DirectionsParams>,
) -> Result<Json<DirectionsResponse>, ApiError> {
    let result = state
        .directions_service
        .directions(
            params.from.as_deref(),
            params.to.as_deref(),
            params.profile.as_deref(),
        )
        .await
        .map_err(|e| {
            ApiError::from_application(e, "Directions failed", state.expose_error_details)
        })?;

    Ok(Json(DirectionsResponse {
        success: true,
        result,
    }))
}
