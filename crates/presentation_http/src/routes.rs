//! Route definitions

use std::path::Path;

use axum::{Router, routing::get};
use tower_http::services::{ServeDir, ServeFile};

use crate::{handlers, state::AppState};

/// Create the API router
///
/// Every route lives under `/api`; unknown `/api` paths get a JSON 404.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/transit/points", get(handlers::transit::list_points))
        .route("/search/places", get(handlers::search::search_places))
        .route("/geocode", get(handlers::geocode::geocode))
        .route("/directions", get(handlers::directions::directions))
        .route(
            "/tiles/{provider}/{z}/{x}/{y}",
            get(handlers::tiles::get_tile),
        )
        // Paths used by the existing frontend bundle
        .route("/gbaka/points", get(handlers::transit::list_points))
        .route("/mapbox/geocoding", get(handlers::geocode::geocode))
        .route("/mapbox/directions", get(handlers::directions::directions))
        .route("/osm/tiles/{z}/{x}/{y}", get(handlers::tiles::get_osm_tile))
        .route(
            "/mapbox/tiles/{z}/{x}/{y}",
            get(handlers::tiles::get_mapbox_tile),
        )
        .fallback(handlers::fallback::api_not_found);

    Router::new().nest("/api", api).with_state(state)
}

/// Serve the frontend bundle for every non-API path
///
/// Paths without a matching file get `index.html` so client-side routing
/// works on reload.
pub fn with_frontend(router: Router, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();
    let index = ServeFile::new(static_dir.join("index.html"));
    router.fallback_service(ServeDir::new(static_dir).fallback(index))
}
