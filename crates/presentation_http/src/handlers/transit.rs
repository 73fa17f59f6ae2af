//! Transit points handler

use axum::{
    Json,
    extract::{Query, State},
};
use domain::TransitPoint;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TransitQuery {
    /// `gbaka` or `woroworo`; anything else filters everything out
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TransitResponse {
    pub success: bool,
    pub count: usize,
    pub points: Vec<TransitPoint>,
}

/// List transit points, optionally filtered by type
pub async fn list_points(
    State(state): State<AppState>,
    Query(query): Query<TransitQuery>,
) -> Json<TransitResponse> {
    let points = match query.kind.as_deref().map(str::trim).filter(|k| !k.is_empty()) {
        Some(kind) => state.transit.filter_by_type(kind),
        None => state.transit.all().to_vec(),
    };

    Json(TransitResponse {
        success: true,
        count: points.len(),
        points,
    })
}
