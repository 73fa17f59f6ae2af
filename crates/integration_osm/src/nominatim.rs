//! Nominatim place search
//!
//! Queries are suffixed with the configured city and bounded to its viewbox,
//! so a bare "Gare Nord" resolves inside the metro area first.

use std::time::Duration;

use domain::GeoLocation;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::OsmConfig;
use crate::error::OsmError;

/// One raw Nominatim hit (`format=json`)
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    pub place_id: u64,
    pub lat: String,
    pub lon: String,
    pub display_name: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub importance: Option<f64>,
    #[serde(default)]
    pub address: Option<Value>,
}

impl NominatimPlace {
    /// Parsed position; Nominatim sends both numbers as strings
    pub fn location(&self) -> Result<GeoLocation, OsmError> {
        let lat: f64 = self
            .lat
            .parse()
            .map_err(|_| OsmError::ParseError(format!("invalid latitude '{}'", self.lat)))?;
        let lon: f64 = self
            .lon
            .parse()
            .map_err(|_| OsmError::ParseError(format!("invalid longitude '{}'", self.lon)))?;
        GeoLocation::new(lat, lon).map_err(|e| OsmError::ParseError(e.to_string()))
    }

    /// Whether `display_name` contains any of `names`, ignoring case
    pub fn mentions_any<S: AsRef<str>>(&self, names: &[S]) -> bool {
        let haystack = self.display_name.to_lowercase();
        names
            .iter()
            .map(|n| n.as_ref().trim().to_lowercase())
            .any(|n| !n.is_empty() && haystack.contains(&n))
    }

    /// Leading `segments` comma-separated parts of `display_name`
    pub fn leading_segments(&self, segments: usize) -> String {
        let parts: Vec<&str> = self
            .display_name
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .take(segments.max(1))
            .collect();
        if parts.is_empty() {
            self.display_name.trim().to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Nominatim search client
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: Client,
    config: OsmConfig,
}

impl NominatimClient {
    /// Create a new Nominatim client
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the HTTP client cannot be built.
    pub fn new(config: &OsmConfig) -> Result<Self, OsmError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| OsmError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Search places in the configured city
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        text: &str,
        limit: u8,
        country: &str,
    ) -> Result<Vec<NominatimPlace>, OsmError> {
        let url = format!("{}/search", OsmConfig::trimmed(&self.config.nominatim_url));
        let query = format!("{} {}", text.trim(), self.config.city);
        let params = [
            ("q", query),
            ("format", "json".to_string()),
            ("limit", limit.to_string()),
            ("countrycodes", country.to_string()),
            ("accept-language", self.config.language.clone()),
            ("viewbox", self.config.viewbox.to_string()),
            ("bounded", "1".to_string()),
            ("addressdetails", "1".to_string()),
        ];

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| OsmError::from_reqwest(e, self.config.timeout_secs))?;

        if !response.status().is_success() {
            return Err(OsmError::RequestFailed {
                status: response.status().as_u16(),
            });
        }

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| OsmError::ParseError(e.without_url().to_string()))?;

        debug!(count = places.len(), "Nominatim search complete");
        Ok(places)
    }

    /// Whether a hit is confirmed to lie in the configured city
    pub fn in_city(&self, place: &NominatimPlace) -> bool {
        place.mentions_any(&[self.config.city.as_str()]) || place.mentions_any(&self.config.city_aliases)
    }

    /// Short label for a hit
    ///
    /// The first segment of the display name; with `detailed_labels` the
    /// district is kept when the hit lies in the city.
    pub fn label(&self, place: &NominatimPlace) -> String {
        if self.config.detailed_labels && self.in_city(place) {
            place.leading_segments(2)
        } else {
            place.leading_segments(1)
        }
    }
}
