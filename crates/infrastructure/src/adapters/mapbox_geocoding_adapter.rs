//! Mapbox geocoding adapter - Implements PlaceSearchPort using integration_mapbox

use std::sync::Arc;

use application::{ApplicationError, PlaceQuery, PlaceSearchPort};
use async_trait::async_trait;
use domain::{GeoLocation, PlaceResult};
use integration_mapbox::{GeocodeRequest, GeocodingFeature, MapboxClient};
use tracing::{instrument, warn};

use super::{MAPBOX, from_mapbox};

/// Feature types the direct geocoder asks for
pub const GEOCODE_TYPES: &str = "poi,address,neighborhood,place";

/// Mapbox forward geocoding as a place search strategy
pub struct MapboxGeocodingAdapter {
    client: Arc<MapboxClient>,
    types: Option<&'static str>,
}

impl std::fmt::Debug for MapboxGeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxGeocodingAdapter")
            .field("client", &"MapboxClient")
            .field("types", &self.types)
            .finish()
    }
}

impl MapboxGeocodingAdapter {
    /// Unfiltered geocoding, as used for the search fallback
    pub const fn new(client: Arc<MapboxClient>) -> Self {
        Self {
            client,
            types: None,
        }
    }

    /// Geocoding restricted to points of interest, addresses and places
    pub const fn for_geocode(client: Arc<MapboxClient>) -> Self {
        Self {
            client,
            types: Some(GEOCODE_TYPES),
        }
    }

    fn to_place(feature: GeocodingFeature) -> Option<PlaceResult> {
        let [lon, lat] = feature.center;
        let center = match GeoLocation::from_lon_lat(lon, lat) {
            Ok(center) => center,
            Err(e) => {
                warn!(id = %feature.id, error = %e, "Skipping Mapbox feature");
                return None;
            },
        };

        Some(
            PlaceResult::new(feature.id, feature.text, feature.place_name, center)
                .with_place_type(feature.place_type)
                .with_relevance(feature.relevance)
                .with_properties(feature.properties),
        )
    }
}

#[async_trait]
impl PlaceSearchPort for MapboxGeocodingAdapter {
    fn source(&self) -> &'static str {
        MAPBOX
    }

    fn attribution(&self) -> &'static str {
        "© Mapbox © OpenStreetMap"
    }

    #[instrument(skip(self), fields(query = %query.text))]
    async fn search(&self, query: &PlaceQuery) -> Result<Vec<PlaceResult>, ApplicationError> {
        let mut request = GeocodeRequest::new(query.text.clone(), query.limit, query.country.clone());
        if let Some(types) = self.types {
            request = request.with_types(types);
        }

        let features = self.client.geocode(&request).await.map_err(from_mapbox)?;
        Ok(features.into_iter().filter_map(Self::to_place).collect())
    }
}
