//! Application configuration
//!
//! Sources, lowest precedence first:
//! - built-in defaults
//! - optional `config.toml` in the working directory
//! - `GBAKA_*` environment variables, `__` between nested keys
//!   (e.g. `GBAKA_SERVER__PORT`, `GBAKA_OSM__DETAILED_LABELS`)
//! - the conventional `MAPBOX_TOKEN`, `PORT` and `NODE_ENV`

mod server;

use std::fmt;

use integration_mapbox::{MapboxConfig, MapboxError};
use integration_osm::{OsmConfig, OsmError};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub use server::ServerConfig;

/// Application environment (development or production)
///
/// Production hides error details from API responses and restricts CORS
/// to the configured origins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - error details exposed
    #[default]
    Development,
    /// Production environment - strict defaults
    Production,
}

impl Environment {
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Configuration that cannot be used to start the gateway
#[derive(Debug, Error)]
pub enum InvalidConfig {
    #[error(transparent)]
    Mapbox(#[from] MapboxError),

    #[error(transparent)]
    Osm(#[from] OsmError),

    #[error("server.{field}: {message}")]
    Server {
        field: &'static str,
        message: String,
    },
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Mapbox geocoding, directions and tiles
    #[serde(default)]
    pub mapbox: MapboxConfig,

    /// Nominatim search and OSM tiles
    #[serde(default)]
    pub osm: OsmConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = Self::defaults()?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., GBAKA_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix("GBAKA")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a TOML document on top of the defaults
    pub fn from_toml(toml: &str) -> Result<Self, config::ConfigError> {
        Self::defaults()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError>
    {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3001)
    }

    /// Apply the unprefixed variables deployments conventionally set
    ///
    /// `NODE_ENV` only applies when `GBAKA_ENVIRONMENT` is absent.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("MAPBOX_TOKEN").filter(|v| !v.trim().is_empty()) {
            self.mapbox.access_token = SecretString::from(val.trim().to_owned());
            debug!("Mapbox token taken from MAPBOX_TOKEN");
        }

        if let Some(val) = lookup("PORT") {
            match val.trim().parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!(value = %val, "Ignoring invalid PORT"),
            }
        }

        if lookup("GBAKA_ENVIRONMENT").is_none() {
            if let Some(val) = lookup("NODE_ENV") {
                match val.parse::<Environment>() {
                    Ok(env) => self.environment = env,
                    Err(e) => warn!(error = %e, "Ignoring NODE_ENV"),
                }
            }
        }
    }

    /// Check everything needed to serve requests
    ///
    /// # Errors
    ///
    /// Fails when the Mapbox token is missing, an upstream URL is malformed,
    /// or the log format is unknown.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        self.mapbox.validate()?;
        self.osm.validate()?;
        if !matches!(self.server.log_format.as_str(), "text" | "json") {
            return Err(InvalidConfig::Server {
                field: "log_format",
                message: format!("expected 'text' or 'json', got '{}'", self.server.log_format),
            });
        }
        Ok(())
    }

    /// Whether API errors may carry upstream detail
    pub const fn expose_error_details(&self) -> bool {
        !self.environment.is_production()
    }
}
