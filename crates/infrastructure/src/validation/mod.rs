//! Configuration validation module
//!
//! Startup checks that warn about risky but loadable configuration.

pub mod startup;

pub use startup::{StartupValidator, StartupWarning, WarningSeverity};
