//! Value Objects - Immutable, identity-less domain primitives

mod bounding_box;
mod geo_location;
mod tile;
mod travel_profile;

pub use bounding_box::BoundingBox;
pub use geo_location::GeoLocation;
pub use tile::{TileCoordinates, TileProvider};
pub use travel_profile::TravelProfile;
