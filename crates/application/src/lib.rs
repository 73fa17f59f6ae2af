//! Application layer - Use cases and orchestration
//!
//! Contains the port definitions the provider adapters implement and the
//! services the HTTP layer calls: place search with provider fallback,
//! geocoding, directions, tiles and the transit point catalogue.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
