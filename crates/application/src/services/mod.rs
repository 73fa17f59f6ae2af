//! Application services

mod directions_service;
mod geocode_service;
mod search_service;
mod tile_service;
mod transit_catalog;

pub use directions_service::DirectionsService;
pub use geocode_service::GeocodeService;
pub use search_service::{DEFAULT_COUNTRY, DEFAULT_LIMIT, MAX_LIMIT, SearchOutcome, SearchService};
pub use tile_service::TileService;
pub use transit_catalog::TransitCatalog;
