//! Normalized search and geocoding hits

use serde::Serialize;
use serde_json::Value;

use crate::value_objects::GeoLocation;

/// GeoJSON point geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Point")]
pub struct PointGeometry {
    pub coordinates: GeoLocation,
}

/// A place returned by search or geocoding, shaped like a GeoJSON feature
///
/// `center` and `geometry` are always built from the same location; there is
/// no way to set one without the other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceResult {
    id: String,
    #[serde(rename = "type")]
    feature_type: &'static str,
    place_type: Vec<String>,
    relevance: f64,
    text: String,
    place_name: String,
    center: GeoLocation,
    geometry: PointGeometry,
    properties: Value,
}

impl PlaceResult {
    /// Relevance of a hit known to lie within the target metro area
    pub const RELEVANCE_CONFIRMED: f64 = 1.0;
    /// Relevance of a hit whose location has not been confirmed
    pub const RELEVANCE_UNCONFIRMED: f64 = 0.5;

    /// Create a place with unconfirmed relevance and no metadata
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        place_name: impl Into<String>,
        center: GeoLocation,
    ) -> Self {
        Self {
            id: id.into(),
            feature_type: "Feature",
            place_type: vec!["place".to_string()],
            relevance: Self::RELEVANCE_UNCONFIRMED,
            text: text.into(),
            place_name: place_name.into(),
            center,
            geometry: PointGeometry {
                coordinates: center,
            },
            properties: Value::Object(serde_json::Map::new()),
        }
    }

    /// Synthetic result for a query that already was a coordinate pair
    #[must_use]
    pub fn from_coordinates(location: GeoLocation, relevance: f64) -> Self {
        let label = location.label();
        Self::new(
            format!("coordinates.{}", location.to_path_segment()),
            label.clone(),
            label,
            location,
        )
        .with_place_type(vec!["coordinates".to_string()])
        .with_relevance(relevance)
    }

    #[must_use]
    pub fn with_place_type(mut self, place_type: Vec<String>) -> Self {
        self.place_type = place_type;
        self
    }

    /// Set relevance, clamped to `[0, 1]`
    #[must_use]
    pub fn with_relevance(mut self, relevance: f64) -> Self {
        self.relevance = if relevance.is_finite() {
            relevance.clamp(0.0, 1.0)
        } else {
            Self::RELEVANCE_UNCONFIRMED
        };
        self
    }

    #[must_use]
    pub fn with_properties(mut self, properties: Value) -> Self {
        self.properties = properties;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn place_name(&self) -> &str {
        &self.place_name
    }

    pub const fn center(&self) -> GeoLocation {
        self.center
    }

    pub const fn geometry(&self) -> &PointGeometry {
        &self.geometry
    }

    pub const fn relevance(&self) -> f64 {
        self.relevance
    }

    pub fn place_type(&self) -> &[String] {
        &self.place_type
    }

    pub const fn properties(&self) -> &Value {
        &self.properties
    }
}
