//! Infrastructure adapters
//!
//! Adapters connect application ports to the Mapbox and OSM clients.
//! Each adapter is the one place where its provider's `[lon, lat]` arrays
//! become [`domain::GeoLocation`]s.

mod mapbox_directions_adapter;
mod mapbox_geocoding_adapter;
mod nominatim_search_adapter;
mod tile_adapters;

use application::ApplicationError;
use integration_mapbox::MapboxError;
use integration_osm::OsmError;

pub use mapbox_directions_adapter::MapboxDirectionsAdapter;
pub use mapbox_geocoding_adapter::MapboxGeocodingAdapter;
pub use nominatim_search_adapter::NominatimSearchAdapter;
pub use tile_adapters::{MapboxTileAdapter, OsmTileAdapter};

pub(crate) const MAPBOX: &str = "mapbox";
pub(crate) const OSM: &str = "osm";

pub(crate) fn from_mapbox(err: MapboxError) -> ApplicationError {
    match err {
        MapboxError::ConfigurationError(message) => ApplicationError::Configuration(message),
        other => match other.status() {
            Some(status) => ApplicationError::external_status(MAPBOX, status, other.to_string()),
            None => ApplicationError::external(MAPBOX, other.to_string()),
        },
    }
}

pub(crate) fn from_osm(err: OsmError) -> ApplicationError {
    match err {
        OsmError::ConfigurationError(message) => ApplicationError::Configuration(message),
        other => match other.status() {
            Some(status) => ApplicationError::external_status(OSM, status, other.to_string()),
            None => ApplicationError::external(OSM, other.to_string()),
        },
    }
}
