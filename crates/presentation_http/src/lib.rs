//! Gbaka Guides HTTP presentation layer
//!
//! This crate provides the `/api` surface of the gateway and serves the
//! frontend bundle.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod shutdown;
pub mod state;

pub use error::ApiError;
pub use middleware::cors_layer;
pub use routes::{create_router, with_frontend};
pub use shutdown::{Drain, drain_within, shutdown_signal};
pub use state::AppState;
