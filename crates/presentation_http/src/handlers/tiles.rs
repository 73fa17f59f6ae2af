//! Raster tile proxy handlers

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Cache lifetime advertised for proxied tiles
pub const TILE_CACHE_CONTROL: &str = "public, max-age=86400";

#[derive(Debug, Default, Deserialize)]
pub struct TileParams {
    /// Retina hint, e.g. `@2x`
    pub scale: Option<String>,
}

/// `/api/tiles/{provider}/{z}/{x}/{y}`
pub async fn get_tile(
    State(state): State<AppState>,
    Path((provider, z, x, y)): Path<(String, String, String, String)>,
    Query(params): Query<TileParams>,
) -> Result<Response, ApiError> {
    fetch(&state, &provider, &z, &x, &y, params.scale.as_deref()).await
}

/// `/api/osm/tiles/{z}/{x}/{y}`
pub async fn get_osm_tile(
    State(state): State<AppState>,
    Path((z, x, y)): Path<(String, String, String)>,
) -> Result<Response, ApiError> {
    fetch(&state, "osm", &z, &x, &y, None).await
}

/// `/api/mapbox/tiles/{z}/{x}/{y}`
pub async fn get_mapbox_tile(
    State(state): State<AppState>,
    Path((z, x, y)): Path<(String, String, String)>,
    Query(params): Query<TileParams>,
) -> Result<Response, ApiError> {
    fetch(&state, "mapbox", &z, &x, &y, params.scale.as_deref()).await
}

#[instrument(skip(state))]
async fn fetch(
    state: &AppState,
    provider: &str,
    z: &str,
    x: &str,
    y: &str,
    scale: Option<&str>,
) -> Result<Response, ApiError> {
    // Tile templates may append the extension or the retina suffix to y
    let y = y.strip_suffix(".png").unwrap_or(y);
    let (y, scale) = match y.strip_suffix("@2x") {
        Some(y) => (y, Some("@2x")),
        None => (y, scale),
    };

    let z = parse_component(z, "z")?;
    let x = parse_component(x, "x")?;
    let y = parse_component(y, "y")?;
    let z = u8::try_from(z)
        .map_err(|_| ApiError::BadRequest(format!("Invalid tile coordinate z: {z}")))?;

    // Tile failures never carry upstream details
    let bytes = state
        .tile_service
        .fetch(provider, z, x, y, scale)
        .await
        .map_err(|e| ApiError::from_application(e, "Failed to fetch tile", false))?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, TILE_CACHE_CONTROL),
        ],
        bytes,
    )
        .into_response())
}

fn parse_component(raw: &str, name: &str) -> Result<u32, ApiError> {
    raw.parse::<u32>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid tile coordinate {name}: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_must_be_unsigned() {
        assert_eq!(parse_component("4003", "x").unwrap(), 4003);
        assert!(parse_component("-1", "x").is_err());
        assert!(parse_component("abc", "y").is_err());
        assert!(parse_component("", "z").is_err());
    }
}
