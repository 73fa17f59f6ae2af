//! Place search with ordered provider fallback
//!
//! Strategies are tried in order; the first one returning a non-empty list
//! answers the request. Results are ordered by relevance, highest first.
//! A query that already is a `lat,lon` pair never reaches a provider.

use std::sync::Arc;

use domain::{BoundingBox, GeoLocation, PlaceResult};
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{PlaceQuery, PlaceSearchPort};

/// Result count used when the caller gives none
pub const DEFAULT_LIMIT: u8 = 5;
/// Upper bound accepted by every configured provider
pub const MAX_LIMIT: u8 = 10;
/// Country filter used when the caller gives none
pub const DEFAULT_COUNTRY: &str = "ci";

/// Places found for a query and where they came from
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub results: Vec<PlaceResult>,
    pub attribution: String,
    /// `None` when the primary strategy answered, otherwise
    /// `<provider>_fallback`, or `coordinates` for a parsed coordinate query
    pub source: Option<String>,
}

/// Ordered chain of place search strategies
pub struct SearchService {
    strategies: Vec<Arc<dyn PlaceSearchPort>>,
    area: BoundingBox,
}

impl std::fmt::Debug for SearchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchService")
            .field(
                "strategies",
                &self.strategies.iter().map(|s| s.source()).collect::<Vec<_>>(),
            )
            .field("area", &self.area)
            .finish()
    }
}

impl SearchService {
    /// Create a search chain; the first strategy is the primary one
    pub fn new(strategies: Vec<Arc<dyn PlaceSearchPort>>, area: BoundingBox) -> Self {
        Self { strategies, area }
    }

    /// Search for places
    ///
    /// # Errors
    ///
    /// - `Validation` when the query is blank
    /// - the primary strategy's error when no strategy succeeded
    #[instrument(skip(self), fields(strategies = self.strategies.len()))]
    pub async fn search(
        &self,
        text: &str,
        limit: Option<u8>,
        country: Option<&str>,
    ) -> Result<SearchOutcome, ApplicationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ApplicationError::missing_parameter("q"));
        }

        if let Ok(location) = GeoLocation::parse_lat_lon(text) {
            debug!(%location, "Query is a coordinate pair");
            return Ok(self.coordinate_outcome(location));
        }

        let query = PlaceQuery {
            text: text.to_string(),
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
            country: normalize_country(country),
        };

        let mut first_error: Option<ApplicationError> = None;
        let mut empty_outcome: Option<SearchOutcome> = None;

        for (index, strategy) in self.strategies.iter().enumerate() {
            let source = if index == 0 {
                None
            } else {
                Some(format!("{}_fallback", strategy.source()))
            };

            match strategy.search(&query).await {
                Ok(mut results) if !results.is_empty() => {
                    results.sort_by(|a, b| b.relevance().total_cmp(&a.relevance()));
                    debug!(provider = strategy.source(), count = results.len(), "Places found");
                    return Ok(SearchOutcome {
                        results,
                        attribution: strategy.attribution().to_string(),
                        source,
                    });
                },
                Ok(_) => {
                    debug!(provider = strategy.source(), "No places found");
                    empty_outcome.get_or_insert(SearchOutcome {
                        results: Vec::new(),
                        attribution: strategy.attribution().to_string(),
                        source,
                    });
                },
                Err(e) => {
                    warn!(provider = strategy.source(), error = %e, "Place search failed");
                    first_error.get_or_insert(e);
                },
            }
        }

        if let Some(outcome) = empty_outcome {
            return Ok(outcome);
        }

        Err(first_error.unwrap_or_else(|| {
            ApplicationError::Configuration("no place search provider configured".to_string())
        }))
    }

    fn coordinate_outcome(&self, location: GeoLocation) -> SearchOutcome {
        let relevance = if self.area.contains(&location) {
            PlaceResult::RELEVANCE_CONFIRMED
        } else {
            PlaceResult::RELEVANCE_UNCONFIRMED
        };

        SearchOutcome {
            results: vec![PlaceResult::from_coordinates(location, relevance)],
            attribution: String::new(),
            source: Some("coordinates".to_string()),
        }
    }
}

fn normalize_country(country: Option<&str>) -> String {
    country
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map_or_else(|| DEFAULT_COUNTRY.to_string(), str::to_lowercase)
}
