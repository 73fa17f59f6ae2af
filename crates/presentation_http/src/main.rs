//! Gbaka Guides gateway
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::{
    DirectionsService, GeocodeService, PlaceSearchPort, SearchService, TilePort, TileService,
    TransitCatalog,
};
use infrastructure::{
    AppConfig, LogFormat, MapboxDirectionsAdapter, MapboxGeocodingAdapter, MapboxTileAdapter,
    NominatimSearchAdapter, OsmTileAdapter, StartupValidator, TelemetryConfig, init_telemetry,
};
use integration_mapbox::MapboxClient;
use integration_osm::{NominatimClient, OsmTileClient};
use presentation_http::{
    Drain, cors_layer, drain_within, routes, shutdown_signal, state::AppState,
};
use tokio::{net::TcpListener, sync::Notify};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    let format: LogFormat = config.server.log_format.parse()?;
    init_telemetry(&TelemetryConfig::with_format(format))?;

    info!("🚌 Gbaka Guides gateway v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }

    let warnings = StartupValidator::validate(&config);
    StartupValidator::log_warnings(&warnings);
    if StartupValidator::should_block_startup(&config, &warnings) {
        anyhow::bail!("Refusing to start in production with critical configuration issues");
    }

    info!(
        host = %config.server.host,
        port = %config.server.port,
        environment = %config.environment,
        "Configuration loaded"
    );

    let state = build_state(&config)?;

    let app = routes::with_frontend(routes::create_router(state), &config.server.static_dir)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server, config.environment));

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🚀 Server listening on http://{}", addr);
    info!("🩺 Health check: http://{}/api/health", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    let signalled = Arc::new(Notify::new());
    let trigger = Arc::clone(&signalled);
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            trigger.notify_one();
        })
        .into_future();

    match drain_within(server, signalled, shutdown_timeout).await? {
        Drain::Complete => info!("👋 Server shutdown complete"),
        Drain::TimedOut => warn!("👋 Server stopped before all connections drained"),
    }

    Ok(())
}

/// Wire provider clients into the services
fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let mapbox = Arc::new(MapboxClient::new(&config.mapbox)?);
    let nominatim = NominatimClient::new(&config.osm)?;
    let osm_tiles = OsmTileClient::new(&config.osm)?;
    let area = config.osm.viewbox;

    let strategies: Vec<Arc<dyn PlaceSearchPort>> = vec![
        Arc::new(NominatimSearchAdapter::new(nominatim)),
        Arc::new(MapboxGeocodingAdapter::new(Arc::clone(&mapbox))),
    ];
    let tile_sources: Vec<Arc<dyn TilePort>> = vec![
        Arc::new(MapboxTileAdapter::new(Arc::clone(&mapbox))),
        Arc::new(OsmTileAdapter::new(osm_tiles)),
    ];

    let transit = TransitCatalog::default();
    info!(points = transit.len(), "Transit catalog ready");

    Ok(AppState {
        search_service: Arc::new(SearchService::new(strategies, area)),
        geocode_service: Arc::new(GeocodeService::new(
            Arc::new(MapboxGeocodingAdapter::for_geocode(Arc::clone(&mapbox))),
            area,
        )),
        directions_service: Arc::new(DirectionsService::new(Arc::new(
            MapboxDirectionsAdapter::new(mapbox),
        ))),
        tile_service: Arc::new(TileService::new(tile_sources)),
        transit,
        expose_error_details: config.expose_error_details(),
        provider_configured: config.mapbox.has_token(),
    })
}
