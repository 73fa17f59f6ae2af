//! Domain layer for Gbaka Guides
//!
//! Contains the geographic value objects and the request-scoped entities
//! (places, routes, transit points) exchanged with map providers.
//! This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
