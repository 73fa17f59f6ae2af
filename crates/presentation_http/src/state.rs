//! Application state shared across handlers

use std::sync::Arc;

use application::{DirectionsService, GeocodeService, SearchService, TileService, TransitCatalog};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Place search with provider fallback
    pub search_service: Arc<SearchService>,
    /// Single-provider forward geocoding
    pub geocode_service: Arc<GeocodeService>,
    pub directions_service: Arc<DirectionsService>,
    pub tile_service: Arc<TileService>,
    /// Curated transit points
    pub transit: TransitCatalog,
    /// Whether error bodies may carry upstream details (never in production)
    pub expose_error_details: bool,
    /// Whether a Mapbox access token is configured
    pub provider_configured: bool,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("search_service", &self.search_service)
            .field("geocode_service", &self.geocode_service)
            .field("directions_service", &self.directions_service)
            .field("tile_service", &self.tile_service)
            .field("transit_points", &self.transit.len())
            .field("expose_error_details", &self.expose_error_details)
            .field("provider_configured", &self.provider_configured)
            .finish()
    }
}
