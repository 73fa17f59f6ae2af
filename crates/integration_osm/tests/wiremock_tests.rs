//! Integration tests for the OSM clients (wiremock-based)

use domain::TileCoordinates;
use integration_osm::{NominatimClient, OsmConfig, OsmError, OsmTileClient};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const fn sample_search_json() -> &'static str {
    r#"[
        {
            "place_id": 101,
            "lat": "5.3005",
            "lon": "-4.0134",
            "display_name": "Gare de Bassam, Treichville, Abidjan, Côte d'Ivoire",
            "class": "amenity",
            "type": "bus_station",
            "importance": 0.31
        },
        {
            "place_id": 102,
            "lat": "5.4100",
            "lon": "-3.9400",
            "display_name": "Gare, Bingerville, Côte d'Ivoire",
            "class": "highway",
            "type": "bus_stop"
        }
    ]"#
}

#[tokio::test]
async fn test_search_sends_bounded_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Gare de Bassam Abidjan"))
        .and(query_param("format", "json"))
        .and(query_param("limit", "5"))
        .and(query_param("countrycodes", "ci"))
        .and(query_param("accept-language", "fr"))
        .and(query_param("viewbox", "-4.2,5.1,-3.9,5.5"))
        .and(query_param("bounded", "1"))
        .and(query_param("addressdetails", "1"))
        .and(header("user-agent", "Gbaka-Guides-App/1.0 (gbaka-transport-app)"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_search_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = NominatimClient::new(&OsmConfig::for_testing(&server.uri())).unwrap();
    let places = client.search("Gare de Bassam", 5, "ci").await.unwrap();

    assert_eq!(places.len(), 2);
    assert_eq!(places[0].place_id, 101);
    assert_eq!(client.label(&places[0]), "Gare de Bassam");
    assert!(client.in_city(&places[0]));
    assert!(!client.in_city(&places[1]));
    assert_eq!(places[1].importance, None);
}

#[tokio::test]
async fn test_search_empty_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let client = NominatimClient::new(&OsmConfig::for_testing(&server.uri())).unwrap();
    assert!(client.search("zzz", 5, "ci").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = NominatimClient::new(&OsmConfig::for_testing(&server.uri())).unwrap();
    let err = client.search("Plateau", 5, "ci").await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_search_invalid_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
        .mount(&server)
        .await;

    let client = NominatimClient::new(&OsmConfig::for_testing(&server.uri())).unwrap();
    let err = client.search("Plateau", 5, "ci").await.unwrap_err();
    assert!(matches!(err, OsmError::ParseError(_)));
}

#[tokio::test]
async fn test_search_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = OsmConfig {
        timeout_secs: 1,
        ..OsmConfig::for_testing(&server.uri())
    };
    let client = NominatimClient::new(&config).unwrap();
    let err = client.search("Plateau", 5, "ci").await.unwrap_err();
    assert!(matches!(err, OsmError::Timeout { timeout_secs: 1 }));
}

#[tokio::test]
async fn test_tile_bytes_passed_through() {
    let server = MockServer::start().await;
    let png: &[u8] = b"\x89PNG\r\n\x1a\nrest-of-tile";

    Mock::given(method("GET"))
        .and(path("/tiles/13/4003/3974.png"))
        .and(header("user-agent", "Gbaka-Guides-App/1.0 (gbaka-transport-app)"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(png),
        )
        .mount(&server)
        .await;

    let client = OsmTileClient::new(&OsmConfig::for_testing(&server.uri())).unwrap();
    let tile = TileCoordinates::new(13, 4003, 3974).unwrap();
    let bytes = client.fetch(tile).await.unwrap();
    assert_eq!(&bytes[..], png);
}

#[tokio::test]
async fn test_tile_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = OsmTileClient::new(&OsmConfig::for_testing(&server.uri())).unwrap();
    let tile = TileCoordinates::new(0, 0, 0).unwrap();
    let err = client.fetch(tile).await.unwrap_err();
    assert!(matches!(err, OsmError::RequestFailed { status: 404 }));
}
