//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! map providers. Adapters in the infrastructure layer implement these ports.

mod directions_port;
mod place_search_port;
mod tile_port;

#[cfg(test)]
pub use directions_port::MockDirectionsPort;
pub use directions_port::DirectionsPort;
#[cfg(test)]
pub use place_search_port::MockPlaceSearchPort;
pub use place_search_port::{PlaceQuery, PlaceSearchPort};
#[cfg(test)]
pub use tile_port::MockTilePort;
pub use tile_port::TilePort;
