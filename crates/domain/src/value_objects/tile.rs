//! Map tile addressing

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Deepest zoom level any supported provider serves
pub const MAX_ZOOM: u8 = 22;

/// Raster tile provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileProvider {
    Mapbox,
    Osm,
}

impl TileProvider {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mapbox => "mapbox",
            Self::Osm => "osm",
        }
    }
}

impl fmt::Display for TileProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TileProvider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mapbox" => Ok(Self::Mapbox),
            "osm" | "openstreetmap" => Ok(Self::Osm),
            _ => Err(DomainError::UnknownTileProvider(s.to_string())),
        }
    }
}

/// Address of one tile in the web map pyramid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoordinates {
    z: u8,
    x: u32,
    y: u32,
}

impl TileCoordinates {
    /// Create tile coordinates, checking `x` and `y` fit the zoom level
    pub fn new(z: u8, x: u32, y: u32) -> Result<Self, DomainError> {
        let invalid = DomainError::InvalidTileCoordinates { z, x, y };
        if z > MAX_ZOOM {
            return Err(invalid);
        }
        let side = 1u64 << z;
        if u64::from(x) >= side || u64::from(y) >= side {
            return Err(invalid);
        }
        Ok(Self { z, x, y })
    }

    #[must_use]
    pub const fn z(&self) -> u8 {
        self.z
    }

    #[must_use]
    pub const fn x(&self) -> u32 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> u32 {
        self.y
    }
}

impl fmt::Display for TileCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}
