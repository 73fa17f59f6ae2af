//! Cross-origin policy

use axum::http::{HeaderValue, Method};
use infrastructure::{Environment, ServerConfig};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

/// Build the CORS layer for the configured origins
///
/// An empty list allows any origin in development and none in production.
/// Only `GET` is allowed.
pub fn cors_layer(server: &ServerConfig, environment: Environment) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any);

    if server.allowed_origins.is_empty() {
        if environment.is_production() {
            warn!("⚠️ No CORS origins configured, cross-origin requests are refused");
            return base.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()));
        }
        info!("🌐 CORS: allowing any origin (development mode)");
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            },
        })
        .collect();
    info!("🔒 CORS: allowing {} configured origin(s)", origins.len());
    base.allow_origin(origins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    fn app(server: &ServerConfig, environment: Environment) -> Router {
        Router::new()
            .route("/api/health", get(|| async { "ok" }))
            .layer(cors_layer(server, environment))
    }

    async fn allow_origin_for(server: &ServerConfig, env: Environment, origin: &str) -> Option<String> {
        let response = app(server, env)
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header("origin", origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn listed_origin_is_allowed() {
        let server = ServerConfig::default();
        let allowed =
            allow_origin_for(&server, Environment::Production, "http://localhost:5173").await;
        assert_eq!(allowed.as_deref(), Some("http://localhost:5173"));
    }

    #[tokio::test]
    async fn unlisted_origin_is_refused() {
        let server = ServerConfig::default();
        let allowed = allow_origin_for(&server, Environment::Development, "https://evil.example").await;
        assert!(allowed.is_none());
    }

    #[tokio::test]
    async fn empty_list_allows_any_in_development() {
        let server = ServerConfig {
            allowed_origins: vec![],
            ..ServerConfig::default()
        };
        let allowed = allow_origin_for(&server, Environment::Development, "https://x.example").await;
        assert_eq!(allowed.as_deref(), Some("*"));
    }

    #[tokio::test]
    async fn empty_list_refuses_all_in_production() {
        let server = ServerConfig {
            allowed_origins: vec![],
            ..ServerConfig::default()
        };
        let allowed = allow_origin_for(&server, Environment::Production, "https://x.example").await;
        assert!(allowed.is_none());
    }
}
