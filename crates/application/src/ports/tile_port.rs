//! Raster tile port

use async_trait::async_trait;
use bytes::Bytes;
use domain::{TileCoordinates, TileProvider};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for raster tile sources
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TilePort: Send + Sync {
    /// Which provider this source fetches from
    fn provider(&self) -> TileProvider;

    /// Fetch one PNG tile, unchanged
    async fn fetch_tile(
        &self,
        tile: TileCoordinates,
        retina: bool,
    ) -> Result<Bytes, ApplicationError>;
}
