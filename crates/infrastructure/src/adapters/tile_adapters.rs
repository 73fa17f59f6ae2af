//! Tile adapters - Implement TilePort for Mapbox and OSM

use std::sync::Arc;

use application::{ApplicationError, TilePort};
use async_trait::async_trait;
use bytes::Bytes;
use domain::{TileCoordinates, TileProvider};
use integration_mapbox::MapboxClient;
use integration_osm::OsmTileClient;

use super::{from_mapbox, from_osm};

/// Mapbox raster tiles in the configured style
pub struct MapboxTileAdapter {
    client: Arc<MapboxClient>,
}

impl std::fmt::Debug for MapboxTileAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxTileAdapter")
            .field("client", &"MapboxClient")
            .finish()
    }
}

impl MapboxTileAdapter {
    pub const fn new(client: Arc<MapboxClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TilePort for MapboxTileAdapter {
    fn provider(&self) -> TileProvider {
        TileProvider::Mapbox
    }

    async fn fetch_tile(
        &self,
        tile: TileCoordinates,
        retina: bool,
    ) -> Result<Bytes, ApplicationError> {
        self.client.tile(tile, retina).await.map_err(from_mapbox)
    }
}

/// Standard OSM raster tiles
///
/// OSM serves a single density; the retina hint is ignored.
#[derive(Debug, Clone)]
pub struct OsmTileAdapter {
    client: OsmTileClient,
}

impl OsmTileAdapter {
    pub const fn new(client: OsmTileClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TilePort for OsmTileAdapter {
    fn provider(&self) -> TileProvider {
        TileProvider::Osm
    }

    async fn fetch_tile(
        &self,
        tile: TileCoordinates,
        _retina: bool,
    ) -> Result<Bytes, ApplicationError> {
        self.client.fetch(tile).await.map_err(from_osm)
    }
}
