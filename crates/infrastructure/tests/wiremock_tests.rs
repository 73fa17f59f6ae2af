//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Adapters wired into the application services against mock providers
//! - Startup validation of loaded configuration

use std::sync::Arc;

use application::{
    DirectionsService, PlaceSearchPort, SearchService, TilePort, TileService,
};
use domain::BoundingBox;
use infrastructure::{
    AppConfig, MapboxDirectionsAdapter, MapboxGeocodingAdapter, MapboxTileAdapter,
    NominatimSearchAdapter, OsmTileAdapter, StartupValidator, WarningSeverity,
};
use integration_mapbox::{MapboxClient, MapboxConfig};
use integration_osm::{NominatimClient, OsmConfig, OsmTileClient};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mapbox(server: &MockServer) -> Arc<MapboxClient> {
    Arc::new(assert_ok!(MapboxClient::new(&MapboxConfig::for_testing(
        &server.uri()
    ))))
}

fn search_chain(server: &MockServer) -> SearchService {
    let nominatim = assert_ok!(NominatimClient::new(&OsmConfig::for_testing(&server.uri())));
    let strategies: Vec<Arc<dyn PlaceSearchPort>> = vec![
        Arc::new(NominatimSearchAdapter::new(nominatim)),
        Arc::new(MapboxGeocodingAdapter::new(mapbox(server))),
    ];
    SearchService::new(strategies, BoundingBox::abidjan())
}

// ============================================================================
// Search chain
// ============================================================================

mod search_chain_tests {
    use super::*;

    #[tokio::test]
    async fn nominatim_answers_first() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"place_id": 1, "lat": "5.3364", "lon": "-4.0267",
                     "display_name": "Plateau, Abidjan, Côte d'Ivoire",
                     "class": "place", "type": "suburb"}]"#,
            ))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex("^/geocoding/"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let outcome = assert_ok!(search_chain(&server).search("Plateau", None, None).await);
        assert_eq!(outcome.results.len(), 1);
        assert!(outcome.source.is_none());
        assert_eq!(outcome.attribution, "© OpenStreetMap contributors");
    }

    #[tokio::test]
    async fn mapbox_fallback_after_nominatim_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex("^/geocoding/v5/mapbox.places/"))
            .and(query_param("country", "ci"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"features": [{"id": "place.9", "place_type": ["place"],
                    "relevance": 0.9, "text": "Treichville",
                    "place_name": "Treichville, Abidjan", "center": [-4.01, 5.30]}]}"#,
            ))
            .mount(&server)
            .await;

        let outcome = assert_ok!(search_chain(&server).search("Treichville", None, None).await);
        assert_eq!(outcome.source.as_deref(), Some("mapbox_fallback"));
        assert_eq!(outcome.results[0].id(), "place.9");
        assert!(outcome.attribution.contains("Mapbox"));
    }

    #[tokio::test]
    async fn both_failing_surfaces_nominatim_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex("^/geocoding/"))
            .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"message": "Not Authorized"}"#))
            .mount(&server)
            .await;

        let err = assert_err!(search_chain(&server).search("Koumassi", None, None).await);
        assert_eq!(err.upstream_status(), Some(502));
    }
}

// ============================================================================
// Directions and tiles
// ============================================================================

mod provider_tests {
    use super::*;

    #[tokio::test]
    async fn directions_through_service() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex("^/directions/v5/mapbox/driving/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"code": "Ok", "routes": [{"distance": 3200.0, "duration": 420.0,
                    "geometry": {"type": "LineString", "coordinates": [[-4.065, 5.335], [-4.025, 5.325]]},
                    "legs": [{"summary": "Boulevard de la Paix", "distance": 3200.0, "duration": 420.0,
                      "steps": [{"distance": 3200.0, "duration": 420.0,
                        "maneuver": {"type": "depart", "instruction": "Départ"}}]}]}],
                    "waypoints": [{"name": "", "location": [-4.065, 5.335]}]}"#,
            ))
            .mount(&server)
            .await;

        let service = DirectionsService::new(Arc::new(MapboxDirectionsAdapter::new(mapbox(&server))));
        let result = assert_ok!(
            service
                .directions(Some("-4.065,5.335"), Some("-4.025,5.325"), None)
                .await
        );
        assert_eq!(result.legs[0].steps[0].distance, "3.2 km");
        assert_eq!(result.legs[0].steps[0].duration, "7 min");
        assert_eq!(result.route.geometry.len(), 2);
    }

    #[tokio::test]
    async fn tiles_dispatch_by_provider() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tiles/3/4/2.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"osm-png".to_vec()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex("^/styles/v1/.+/tiles/512/3/4/2$"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"mapbox-png".to_vec()))
            .mount(&server)
            .await;

        let osm = assert_ok!(OsmTileClient::new(&OsmConfig::for_testing(&server.uri())));
        let sources: Vec<Arc<dyn TilePort>> = vec![
            Arc::new(MapboxTileAdapter::new(mapbox(&server))),
            Arc::new(OsmTileAdapter::new(osm)),
        ];
        let service = TileService::new(sources);

        let osm_tile = assert_ok!(service.fetch("osm", 3, 4, 2, None).await);
        assert_eq!(&osm_tile[..], b"osm-png");
        let mapbox_tile = assert_ok!(service.fetch("mapbox", 3, 4, 2, None).await);
        assert_eq!(&mapbox_tile[..], b"mapbox-png");
    }
}

// ============================================================================
// Startup validation
// ============================================================================

mod startup_tests {
    use super::*;

    #[test]
    fn production_without_origins_blocks_startup() {
        let config = assert_ok!(AppConfig::from_toml(
            r#"
            environment = "production"

            [server]
            allowed_origins = []
            "#,
        ));

        let warnings = StartupValidator::validate(&config);
        assert_eq!(warnings[0].severity, WarningSeverity::Critical);
        assert!(StartupValidator::should_block_startup(&config, &warnings));
    }

    #[test]
    fn development_defaults_do_not_block() {
        let config = AppConfig::default();
        let warnings = StartupValidator::validate(&config);
        assert!(!StartupValidator::should_block_startup(&config, &warnings));
    }

    #[test]
    fn loaded_config_without_token_fails_validation() {
        let config = assert_ok!(AppConfig::from_toml("[osm]\ndetailed_labels = true\n"));
        assert!(config.osm.detailed_labels);
        assert_err!(config.validate());
    }
}
