//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer over the Mapbox and
//! OpenStreetMap clients, and loads the application configuration.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod validation;

pub use adapters::*;
pub use config::{AppConfig, Environment, InvalidConfig, ServerConfig};
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
pub use validation::{StartupValidator, StartupWarning, WarningSeverity};
