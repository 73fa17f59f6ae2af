//! Mapbox client configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::MapboxError;

/// Configuration for the Mapbox APIs
#[derive(Clone, Serialize, Deserialize)]
pub struct MapboxConfig {
    /// Public access token (sensitive - uses `SecretString`)
    #[serde(default = "empty_token", skip_serializing)]
    pub access_token: SecretString,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Style used for raster tiles, `owner/style_id`
    #[serde(default = "default_style")]
    pub style: String,

    /// Raster tile size in pixels (256 or 512)
    #[serde(default = "default_tile_size")]
    pub tile_size: u16,

    /// Language for geocoding results and turn instructions
    #[serde(default = "default_language")]
    pub language: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl std::fmt::Debug for MapboxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxConfig")
            .field("access_token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("style", &self.style)
            .field("tile_size", &self.tile_size)
            .field("language", &self.language)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn empty_token() -> SecretString {
    SecretString::from(String::new())
}

fn default_base_url() -> String {
    "https://api.mapbox.com".to_string()
}

fn default_style() -> String {
    "mapbox/streets-v12".to_string()
}

const fn default_tile_size() -> u16 {
    512
}

fn default_language() -> String {
    "fr".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Gbaka-Guides/1.0".to_string()
}

impl Default for MapboxConfig {
    fn default() -> Self {
        Self {
            access_token: empty_token(),
            base_url: default_base_url(),
            style: default_style(),
            tile_size: default_tile_size(),
            language: default_language(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl MapboxConfig {
    /// Create a configuration with the given token and defaults
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            access_token: SecretString::from(token.into()),
            ..Default::default()
        }
    }

    /// Create a configuration pointed at a mock server
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout_secs: 5,
            ..Self::with_token("pk.test-token")
        }
    }

    /// Whether a non-blank token is present
    pub fn has_token(&self) -> bool {
        !self.access_token.expose_secret().trim().is_empty()
    }

    /// Check the token, URL and tile size
    pub fn validate(&self) -> Result<(), MapboxError> {
        if !self.has_token() {
            return Err(MapboxError::ConfigurationError(
                "mapbox access token is missing (set MAPBOX_TOKEN)".to_string(),
            ));
        }
        Url::parse(&self.base_url)
            .map_err(|e| MapboxError::ConfigurationError(format!("mapbox.base_url: {e}")))?;
        if !matches!(self.tile_size, 256 | 512) {
            return Err(MapboxError::ConfigurationError(format!(
                "mapbox.tile_size must be 256 or 512, got {}",
                self.tile_size
            )));
        }
        if self.timeout_secs == 0 {
            return Err(MapboxError::ConfigurationError(
                "mapbox.timeout_secs must be positive".to_string(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(MapboxError::ConfigurationError(
                "mapbox.user_agent must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
