//! OpenStreetMap service configuration

use domain::BoundingBox;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::OsmError;

/// Configuration for Nominatim search and OSM raster tiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsmConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_nominatim_url")]
    pub nominatim_url: String,

    /// Base URL for raster tiles (`{z}/{x}/{y}.png` is appended)
    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    /// City name appended to every search query
    #[serde(default = "default_city")]
    pub city: String,

    /// Other names that confirm a hit lies in the city
    #[serde(default = "default_city_aliases")]
    pub city_aliases: Vec<String>,

    /// Area searches are bounded to
    #[serde(default = "BoundingBox::abidjan")]
    pub viewbox: BoundingBox,

    /// `accept-language` sent to Nominatim
    #[serde(default = "default_language")]
    pub language: String,

    /// User-Agent required by the OSM usage policies
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Keep the district in labels, e.g. "Gare Sud, Treichville"
    #[serde(default)]
    pub detailed_labels: bool,
}

fn default_nominatim_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_tile_url() -> String {
    "https://tile.openstreetmap.org".to_string()
}

fn default_city() -> String {
    "Abidjan".to_string()
}

fn default_city_aliases() -> Vec<String> {
    vec!["abj".to_string()]
}

fn default_language() -> String {
    "fr".to_string()
}

fn default_user_agent() -> String {
    "Gbaka-Guides-App/1.0 (gbaka-transport-app)".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for OsmConfig {
    fn default() -> Self {
        Self {
            nominatim_url: default_nominatim_url(),
            tile_url: default_tile_url(),
            city: default_city(),
            city_aliases: default_city_aliases(),
            viewbox: BoundingBox::abidjan(),
            language: default_language(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            detailed_labels: false,
        }
    }
}

impl OsmConfig {
    /// Point both services at one mock server
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            nominatim_url: base_url.to_string(),
            tile_url: format!("{base_url}/tiles"),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Check URLs and limits before building clients
    pub fn validate(&self) -> Result<(), OsmError> {
        for (name, value) in [("nominatim_url", &self.nominatim_url), ("tile_url", &self.tile_url)] {
            Url::parse(value)
                .map_err(|e| OsmError::ConfigurationError(format!("osm.{name}: {e}")))?;
        }
        if self.timeout_secs == 0 {
            return Err(OsmError::ConfigurationError(
                "osm.timeout_secs must be positive".to_string(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(OsmError::ConfigurationError(
                "osm.user_agent must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn trimmed(url: &str) -> &str {
        url.trim_end_matches('/')
    }
}
