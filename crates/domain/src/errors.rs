//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Coordinates could not be parsed or are out of range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Unsupported travel profile
    #[error("Invalid profile: {0} (expected driving, walking or cycling)")]
    InvalidProfile(String),

    /// Unsupported tile provider
    #[error("Unknown tile provider: {0} (expected mapbox or osm)")]
    UnknownTileProvider(String),

    /// Tile address outside the web map pyramid
    #[error("Invalid tile coordinates: z={z}, x={x}, y={y}")]
    InvalidTileCoordinates { z: u8, x: u32, y: u32 },

    /// Unsupported transit point kind
    #[error("Unknown transit type: {0}")]
    UnknownTransitKind(String),
}
