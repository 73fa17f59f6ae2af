//! Geographic bounding box

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::GeoLocation;
use crate::errors::DomainError;

/// Axis-aligned box in degrees, written `min_lon,min_lat,max_lon,max_lat`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BoundingBox {
    min_lon: f64,
    min_lat: f64,
    max_lon: f64,
    max_lat: f64,
}

impl BoundingBox {
    /// Create a bounding box, normalising corner order
    pub fn new(lon_a: f64, lat_a: f64, lon_b: f64, lat_b: f64) -> Result<Self, DomainError> {
        let a = GeoLocation::from_lon_lat(lon_a, lat_a)?;
        let b = GeoLocation::from_lon_lat(lon_b, lat_b)?;
        Ok(Self {
            min_lon: a.longitude().min(b.longitude()),
            min_lat: a.latitude().min(b.latitude()),
            max_lon: a.longitude().max(b.longitude()),
            max_lat: a.latitude().max(b.latitude()),
        })
    }

    /// The Abidjan metro area as used for Nominatim's `viewbox`
    #[must_use]
    pub const fn abidjan() -> Self {
        Self {
            min_lon: -4.2,
            min_lat: 5.1,
            max_lon: -3.9,
            max_lat: 5.5,
        }
    }

    /// Whether the location lies inside the box (edges included)
    #[must_use]
    pub fn contains(&self, location: &GeoLocation) -> bool {
        (self.min_lon..=self.max_lon).contains(&location.longitude())
            && (self.min_lat..=self.max_lat).contains(&location.latitude())
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }
}

impl FromStr for BoundingBox {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<f64> = s
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| DomainError::InvalidCoordinates(format!("invalid bounding box '{s}'")))?;

        match parts.as_slice() {
            [a, b, c, d] => Self::new(*a, *b, *c, *d),
            _ => Err(DomainError::InvalidCoordinates(format!(
                "bounding box needs four numbers, got '{s}'"
            ))),
        }
    }
}

impl TryFrom<String> for BoundingBox {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BoundingBox> for String {
    fn from(value: BoundingBox) -> Self {
        value.to_string()
    }
}
