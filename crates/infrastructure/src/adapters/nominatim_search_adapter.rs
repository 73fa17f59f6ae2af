//! Nominatim adapter - Implements PlaceSearchPort using integration_osm

use application::{ApplicationError, PlaceQuery, PlaceSearchPort};
use async_trait::async_trait;
use domain::PlaceResult;
use integration_osm::{NominatimClient, NominatimPlace};
use serde_json::json;
use tracing::{instrument, warn};

use super::{OSM, from_osm};

/// Primary place search: Nominatim bounded to the city viewbox
#[derive(Debug, Clone)]
pub struct NominatimSearchAdapter {
    client: NominatimClient,
}

impl NominatimSearchAdapter {
    pub const fn new(client: NominatimClient) -> Self {
        Self { client }
    }

    fn to_place(&self, place: &NominatimPlace) -> Option<PlaceResult> {
        let center = match place.location() {
            Ok(center) => center,
            Err(e) => {
                warn!(place_id = place.place_id, error = %e, "Skipping Nominatim hit");
                return None;
            },
        };

        let relevance = if self.client.in_city(place) {
            PlaceResult::RELEVANCE_CONFIRMED
        } else {
            PlaceResult::RELEVANCE_UNCONFIRMED
        };

        let mut properties = json!({
            "category": place.kind,
            "importance": place.importance,
        });
        if let Some(address) = &place.address {
            properties["address"] = address.clone();
        }

        let place_type = place
            .kind
            .clone()
            .or_else(|| place.class.clone())
            .map_or_else(|| vec!["place".to_string()], |kind| vec![kind]);

        Some(
            PlaceResult::new(
                place.place_id.to_string(),
                self.client.label(place),
                place.display_name.clone(),
                center,
            )
            .with_place_type(place_type)
            .with_relevance(relevance)
            .with_properties(properties),
        )
    }
}

#[async_trait]
impl PlaceSearchPort for NominatimSearchAdapter {
    fn source(&self) -> &'static str {
        OSM
    }

    fn attribution(&self) -> &'static str {
        "© OpenStreetMap contributors"
    }

    #[instrument(skip(self), fields(query = %query.text))]
    async fn search(&self, query: &PlaceQuery) -> Result<Vec<PlaceResult>, ApplicationError> {
        let places = self
            .client
            .search(&query.text, query.limit, &query.country)
            .await
            .map_err(from_osm)?;

        Ok(places.iter().filter_map(|p| self.to_place(p)).collect())
    }
}
