//! OpenStreetMap integration for Gbaka Guides
//!
//! Provides place search through [Nominatim](https://nominatim.openstreetmap.org)
//! restricted to a city viewbox, and raster tiles from the OSM tile servers.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_osm::{NominatimClient, OsmConfig};
//!
//! let client = NominatimClient::new(&OsmConfig::default())?;
//! let places = client.search("Gare de Bassam", 5, "ci").await?;
//! ```

mod config;
mod error;
mod nominatim;
mod tiles;

pub use config::OsmConfig;
pub use error::OsmError;
pub use nominatim::{NominatimClient, NominatimPlace};
pub use tiles::OsmTileClient;
