//! Informal transit departure points

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;
use crate::value_objects::GeoLocation;

/// Kind of informal transit serving a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitKind {
    /// Minibus
    Gbaka,
    /// Shared taxi on a fixed route
    Woroworo,
}

impl TransitKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gbaka => "gbaka",
            Self::Woroworo => "woroworo",
        }
    }
}

impl fmt::Display for TransitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransitKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gbaka" => Ok(Self::Gbaka),
            "woroworo" | "wôrô-wôrô" | "woro-woro" => Ok(Self::Woroworo),
            _ => Err(DomainError::UnknownTransitKind(s.to_string())),
        }
    }
}

/// A curated stop or station, not derived from any live feed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitPoint {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransitKind,
    pub coordinates: GeoLocation,
    pub description: String,
    /// Fare in FCFA
    pub price: u32,
    pub frequency: String,
    pub icon: String,
    pub color: String,
    /// Destinations served, in display order
    pub routes: Vec<String>,
}
