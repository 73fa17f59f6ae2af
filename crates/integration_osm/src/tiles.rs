//! OSM raster tiles

use std::time::Duration;

use bytes::Bytes;
use domain::TileCoordinates;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::OsmConfig;
use crate::error::OsmError;

/// Client for `{tile_url}/{z}/{x}/{y}.png`
#[derive(Debug, Clone)]
pub struct OsmTileClient {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl OsmTileClient {
    /// Create a new tile client
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
            base_url: OsmConfig::trimmed(&config.tile_url).to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    fn tile_url(&self, tile: TileCoordinates) -> String {
        format!("{}/{}/{}/{}.png", self.base_url, tile.z(), tile.x(), tile.y())
    }

    /// Fetch one tile, body unchanged
    #[instrument(skip(self), fields(tile = %tile))]
    pub async fn fetch(&self, tile: TileCoordinates) -> Result<Bytes, OsmError> {
        let response = self
            .client
            .get(self.tile_url(tile))
            .send()
            .await
            .map_err(|e| OsmError::from_reqwest(e, self.timeout_secs))?;

        if !response.status().is_success() {
            return Err(OsmError::RequestFailed {
                status: response.status().as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| OsmError::from_reqwest(e, self.timeout_secs))?;
        debug!(size = body.len(), "OSM tile fetched");
        Ok(body)
    }
}
