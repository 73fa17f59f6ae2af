//! Mapbox API response models

use serde::Deserialize;
use serde_json::Value;

use crate::error::MapboxError;
use crate::polyline::decode_polyline;

/// Geocoding v5 response (a GeoJSON `FeatureCollection`)
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub features: Vec<GeocodingFeature>,
}

/// One geocoding hit
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingFeature {
    pub id: String,
    #[serde(default)]
    pub place_type: Vec<String>,
    #[serde(default)]
    pub relevance: f64,
    pub text: String,
    pub place_name: String,
    /// `[longitude, latitude]`
    pub center: [f64; 2],
    #[serde(default)]
    pub properties: Value,
}

/// Directions v5 response
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<MapboxRoute>,
    #[serde(default)]
    pub waypoints: Vec<MapboxWaypoint>,
}

impl DirectionsResponse {
    /// Mapbox reports unroutable input through `code`, sometimes with HTTP 200
    pub fn is_no_route(&self) -> bool {
        is_no_route_code(&self.code)
    }
}

pub(crate) fn is_no_route_code(code: &str) -> bool {
    matches!(code, "NoRoute" | "NoSegment")
}

/// Route geometry as returned for `geometries=geojson` or `polyline`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RouteGeometry {
    /// GeoJSON `LineString`
    GeoJson {
        coordinates: Vec<[f64; 2]>,
    },
    /// Encoded polyline, precision 5
    Polyline(String),
}

impl RouteGeometry {
    /// `[longitude, latitude]` pairs, decoding a polyline if needed
    pub fn coordinates(&self) -> Result<Vec<[f64; 2]>, MapboxError> {
        match self {
            Self::GeoJson { coordinates } => Ok(coordinates.clone()),
            Self::Polyline(encoded) => decode_polyline(encoded, 5),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapboxRoute {
    pub distance: f64,
    pub duration: f64,
    pub geometry: RouteGeometry,
    #[serde(default)]
    pub legs: Vec<MapboxLeg>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapboxLeg {
    #[serde(default)]
    pub summary: String,
    pub distance: f64,
    pub duration: f64,
    #[serde(default)]
    pub steps: Vec<MapboxStep>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapboxStep {
    pub distance: f64,
    pub duration: f64,
    #[serde(default)]
    pub name: String,
    pub maneuver: MapboxManeuver,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapboxManeuver {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub modifier: Option<String>,
    #[serde(default)]
    pub instruction: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapboxWaypoint {
    #[serde(default)]
    pub name: String,
    /// `[longitude, latitude]`
    pub location: [f64; 2],
    #[serde(default)]
    pub distance: Option<f64>,
}

/// Error body Mapbox sends with non-success statuses
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
