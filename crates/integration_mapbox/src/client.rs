//! Mapbox HTTP client

use std::time::Duration;

use bytes::Bytes;
use domain::{GeoLocation, TileCoordinates, TravelProfile};
use reqwest::{Client, Response};
use secrecy::ExposeSecret;
use tracing::{debug, instrument};
use url::Url;

use crate::config::MapboxConfig;
use crate::error::MapboxError;
use crate::models::{
    DirectionsResponse, ErrorBody, GeocodingFeature, GeocodingResponse, is_no_route_code,
};

/// Parameters for a forward geocoding call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeRequest {
    pub query: String,
    pub limit: u8,
    pub country: String,
    /// Comma-separated feature types, e.g. `poi,address`
    pub types: Option<String>,
}

impl GeocodeRequest {
    pub fn new(query: impl Into<String>, limit: u8, country: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit,
            country: country.into(),
            types: None,
        }
    }

    #[must_use]
    pub fn with_types(mut self, types: impl Into<String>) -> Self {
        self.types = Some(types.into());
        self
    }
}

/// Client for Mapbox geocoding, directions and raster tiles
#[derive(Debug, Clone)]
pub struct MapboxClient {
    client: Client,
    config: MapboxConfig,
}

impl MapboxClient {
    /// Create a new Mapbox client
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing, the config is invalid, or the
    /// HTTP client cannot be built.
    pub fn new(config: &MapboxConfig) -> Result<Self, MapboxError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| MapboxError::ConnectionFailed(e.without_url().to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn base(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    fn token(&self) -> &str {
        self.config.access_token.expose_secret()
    }

    fn geocoding_url(&self, query: &str) -> Result<Url, MapboxError> {
        let file = format!("{query}.json");
        let mut url = Url::parse(self.base())
            .map_err(|e| MapboxError::ConfigurationError(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| MapboxError::ConfigurationError("base URL cannot have a path".to_string()))?
            .pop_if_empty()
            .extend(["geocoding", "v5", "mapbox.places", file.as_str()]);
        Ok(url)
    }

    fn directions_url(&self, profile: TravelProfile, from: GeoLocation, to: GeoLocation) -> String {
        format!(
            "{}/directions/v5/mapbox/{}/{};{}",
            self.base(),
            profile,
            from.to_path_segment(),
            to.to_path_segment()
        )
    }

    fn tile_url(&self, tile: TileCoordinates, retina: bool) -> String {
        format!(
            "{}/styles/v1/{}/tiles/{}/{}/{}/{}{}",
            self.base(),
            self.config.style,
            self.config.tile_size,
            tile.z(),
            tile.x(),
            tile.y(),
            if retina { "@2x" } else { "" }
        )
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, MapboxError> {
        request
            .send()
            .await
            .map_err(|e| MapboxError::from_reqwest(e, self.config.timeout_secs))
    }

    /// Forward geocoding
    #[instrument(skip(self), fields(query = %request.query))]
    pub async fn geocode(
        &self,
        request: &GeocodeRequest,
    ) -> Result<Vec<GeocodingFeature>, MapboxError> {
        let url = self.geocoding_url(&request.query)?;
        let mut params = vec![
            ("access_token", self.token().to_string()),
            ("country", request.country.clone()),
            ("limit", request.limit.to_string()),
            ("language", self.config.language.clone()),
        ];
        if let Some(types) = &request.types {
            params.push(("types", types.clone()));
        }

        let response = self.send(self.client.get(url).query(&params)).await?;
        let response = ensure_success(response).await?;

        let body: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| MapboxError::ParseError(e.without_url().to_string()))?;

        debug!(count = body.features.len(), "Mapbox geocoding complete");
        Ok(body.features)
    }

    /// Driving, walking or cycling directions with turn-by-turn steps
    ///
    /// Returns [`MapboxError::NoRoute`] when Mapbox cannot connect the points.
    #[instrument(skip(self))]
    pub async fn directions(
        &self,
        from: GeoLocation,
        to: GeoLocation,
        profile: TravelProfile,
    ) -> Result<DirectionsResponse, MapboxError> {
        let url = self.directions_url(profile, from, to);
        let params = [
            ("access_token", self.token()),
            ("alternatives", "false"),
            ("geometries", "geojson"),
            ("overview", "full"),
            ("steps", "true"),
            ("language", self.config.language.as_str()),
            ("voice_instructions", "false"),
            ("banner_instructions", "false"),
        ];

        let response = self.send(self.client.get(&url).query(&params)).await?;
        let response = ensure_success(response).await?;

        let body: DirectionsResponse = response
            .json()
            .await
            .map_err(|e| MapboxError::ParseError(e.without_url().to_string()))?;

        if body.is_no_route() {
            return Err(MapboxError::NoRoute { code: body.code });
        }
        if body.code != "Ok" {
            return Err(MapboxError::RequestFailed {
                status: 200,
                message: body.message.unwrap_or(body.code),
            });
        }

        debug!(routes = body.routes.len(), "Mapbox directions complete");
        Ok(body)
    }

    /// Fetch one raster tile, body unchanged
    #[instrument(skip(self), fields(tile = %tile))]
    pub async fn tile(&self, tile: TileCoordinates, retina: bool) -> Result<Bytes, MapboxError> {
        let url = self.tile_url(tile, retina);
        let response = self
            .send(self.client.get(&url).query(&[("access_token", self.token())]))
            .await?;
        let response = ensure_success(response).await?;

        let body = response
            .bytes()
            .await
            .map_err(|e| MapboxError::from_reqwest(e, self.config.timeout_secs))?;
        debug!(size = body.len(), "Mapbox tile fetched");
        Ok(body)
    }
}

/// Turn a non-success status into an error, reading Mapbox's error body
async fn ensure_success(response: Response) -> Result<Response, MapboxError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body: Option<ErrorBody> = response.json().await.ok();
    let (code, message) = body.map_or((None, None), |b| (b.code, b.message));

    if code.as_deref().is_some_and(is_no_route_code) {
        return Err(MapboxError::NoRoute {
            code: code.unwrap_or_default(),
        });
    }

    Err(MapboxError::RequestFailed {
        status: status.as_u16(),
        message: message
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_default(),
    })
}
