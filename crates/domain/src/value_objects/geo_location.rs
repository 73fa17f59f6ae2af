//! Geographic location value object
//!
//! Stored as latitude/longitude, but always exchanged as a GeoJSON position
//! (`[longitude, latitude]`) when serialized. Parsing helpers exist for both
//! textual orders because callers use both: directions take `lon,lat`, while
//! a coordinate typed into the search box reads `lat,lon`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A geographic location with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", try_from = "[f64; 2]")]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]. NaN is rejected by both checks.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates(format!(
                "latitude must be -90 to 90 and longitude -180 to 180 (got {latitude}, {longitude})"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a location from a GeoJSON-ordered pair
    pub fn from_lon_lat(longitude: f64, latitude: f64) -> Result<Self, DomainError> {
        Self::new(latitude, longitude)
    }

    /// Create a location without validation (for compile-time constants)
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// GeoJSON position: `[longitude, latitude]`
    #[must_use]
    pub const fn lon_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// Parse a `"lon,lat"` string, as used by directions requests
    pub fn parse_lon_lat(input: &str) -> Result<Self, DomainError> {
        let (first, second) = split_pair(input)?;
        Self::new(second, first)
    }

    /// Parse a `"lat,lon"` string, as typed by a person into a search box
    pub fn parse_lat_lon(input: &str) -> Result<Self, DomainError> {
        let (first, second) = split_pair(input)?;
        Self::new(first, second)
    }

    /// Short human label with four decimals, latitude first
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }

    /// Comma-joined `lon,lat` as used in provider URL paths
    #[must_use]
    pub fn to_path_segment(&self) -> String {
        format!("{},{}", self.longitude, self.latitude)
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

impl From<GeoLocation> for [f64; 2] {
    fn from(location: GeoLocation) -> Self {
        location.lon_lat()
    }
}

impl TryFrom<[f64; 2]> for GeoLocation {
    type Error = DomainError;

    fn try_from([longitude, latitude]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::from_lon_lat(longitude, latitude)
    }
}

/// Split `"a,b"` into two plain decimal numbers
///
/// Only `-?digits(.digits)?` is accepted on each side so that inputs such as
/// `"inf,1"` or `"1e3,2"` are never mistaken for coordinates.
fn split_pair(input: &str) -> Result<(f64, f64), DomainError> {
    let invalid = || DomainError::InvalidCoordinates(format!("expected two numbers, got '{input}'"));

    let (first, second) = input.split_once(',').ok_or_else(invalid)?;
    let (first, second) = (first.trim(), second.trim());

    if !is_plain_decimal(first) || !is_plain_decimal(second) {
        return Err(invalid());
    }

    let first = first.parse::<f64>().map_err(|_| invalid())?;
    let second = second.parse::<f64>().map_err(|_| invalid())?;
    Ok((first, second))
}

fn is_plain_decimal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    !int_part.is_empty()
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.is_none_or(|f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()))
}
