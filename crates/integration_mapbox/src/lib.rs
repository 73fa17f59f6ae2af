//! Mapbox integration for Gbaka Guides
//!
//! Wraps the [Mapbox](https://docs.mapbox.com/api/) geocoding v5, directions v5
//! and static raster tile APIs behind [`MapboxClient`].
//!
//! The access token is held as a [`secrecy::SecretString`] and only exposed
//! while a request URL is being built. Transport errors are stripped of their
//! URL before they leave this crate, so the token never reaches a log line.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_mapbox::{MapboxClient, MapboxConfig, GeocodeRequest};
//!
//! let client = MapboxClient::new(&config)?;
//! let features = client.geocode(&GeocodeRequest::new("Plateau", 5, "ci")).await?;
//! ```

mod client;
mod config;
mod error;
mod models;
mod polyline;

pub use client::{GeocodeRequest, MapboxClient};
pub use config::MapboxConfig;
pub use error::MapboxError;
pub use models::{
    DirectionsResponse, GeocodingFeature, GeocodingResponse, MapboxLeg, MapboxManeuver,
    MapboxRoute, MapboxStep, MapboxWaypoint, RouteGeometry,
};
pub use polyline::decode_polyline;
