//! Raster tile proxying

use std::sync::Arc;

use bytes::Bytes;
use domain::{TileCoordinates, TileProvider};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::TilePort;

/// Dispatches tile requests to the source for the requested provider
pub struct TileService {
    sources: Vec<Arc<dyn TilePort>>,
}

impl std::fmt::Debug for TileService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TileService")
            .field(
                "sources",
                &self.sources.iter().map(|s| s.provider()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl TileService {
    pub fn new(sources: Vec<Arc<dyn TilePort>>) -> Self {
        Self { sources }
    }

    /// Fetch a tile
    ///
    /// `scale` is the optional retina hint from the tile URL template;
    /// anything containing `@2x` asks for a high-density tile.
    #[instrument(skip(self))]
    pub async fn fetch(
        &self,
        provider: &str,
        z: u8,
        x: u32,
        y: u32,
        scale: Option<&str>,
    ) -> Result<Bytes, ApplicationError> {
        let provider: TileProvider = provider.parse()?;
        let tile = TileCoordinates::new(z, x, y)?;
        let retina = scale.is_some_and(|s| s.contains("@2x"));

        let source = self
            .sources
            .iter()
            .find(|s| s.provider() == provider)
            .ok_or_else(|| {
                ApplicationError::Configuration(format!("no tile source for {provider}"))
            })?;

        let bytes = source.fetch_tile(tile, retina).await?;
        debug!(%provider, %tile, retina, size = bytes.len(), "Tile fetched");
        Ok(bytes)
    }
}
