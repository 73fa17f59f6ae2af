//! Mapbox directions adapter - Implements DirectionsPort using integration_mapbox

use std::sync::Arc;

use application::{ApplicationError, DirectionsPort};
use async_trait::async_trait;
use domain::{
    Directions, GeoLocation, LineString, Maneuver, Route, RouteLeg, RouteStep, TravelProfile,
    Waypoint,
};
use integration_mapbox::{
    DirectionsResponse, MapboxClient, MapboxError, MapboxLeg, MapboxRoute, MapboxWaypoint,
};
use tracing::{debug, instrument};

use super::{MAPBOX, from_mapbox};

/// Directions through the Mapbox directions API
pub struct MapboxDirectionsAdapter {
    client: Arc<MapboxClient>,
}

impl std::fmt::Debug for MapboxDirectionsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxDirectionsAdapter")
            .field("client", &"MapboxClient")
            .finish()
    }
}

impl MapboxDirectionsAdapter {
    pub const fn new(client: Arc<MapboxClient>) -> Self {
        Self { client }
    }
}

fn location([lon, lat]: [f64; 2]) -> Result<GeoLocation, ApplicationError> {
    GeoLocation::from_lon_lat(lon, lat).map_err(|e| {
        ApplicationError::external(MAPBOX, format!("invalid coordinate in response: {e}"))
    })
}

fn convert_leg(leg: MapboxLeg) -> RouteLeg {
    let steps = leg
        .steps
        .into_iter()
        .map(|step| {
            RouteStep::new(
                step.distance,
                step.duration,
                Maneuver {
                    kind: step.maneuver.kind,
                    modifier: step.maneuver.modifier,
                    instruction: step.maneuver.instruction,
                },
            )
        })
        .collect();
    RouteLeg::new(leg.summary, leg.distance, leg.duration, steps)
}

fn convert_route(route: MapboxRoute) -> Result<Route, ApplicationError> {
    let coordinates = route
        .geometry
        .coordinates()
        .map_err(from_mapbox)?
        .into_iter()
        .map(location)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Route::new(
        route.distance,
        route.duration,
        LineString::new(coordinates),
        route.legs.into_iter().map(convert_leg).collect(),
    ))
}

fn convert_waypoint(waypoint: MapboxWaypoint) -> Result<Waypoint, ApplicationError> {
    Ok(Waypoint {
        name: waypoint.name,
        location: location(waypoint.location)?,
        distance: waypoint.distance,
    })
}

fn convert(response: DirectionsResponse) -> Result<Directions, ApplicationError> {
    Ok(Directions {
        routes: response
            .routes
            .into_iter()
            .map(convert_route)
            .collect::<Result<_, _>>()?,
        waypoints: response
            .waypoints
            .into_iter()
            .map(convert_waypoint)
            .collect::<Result<_, _>>()?,
    })
}

#[async_trait]
impl DirectionsPort for MapboxDirectionsAdapter {
    #[instrument(skip(self))]
    async fn directions(
        &self,
        from: GeoLocation,
        to: GeoLocation,
        profile: TravelProfile,
    ) -> Result<Directions, ApplicationError> {
        match self.client.directions(from, to, profile).await {
            Ok(response) => convert(response),
            Err(MapboxError::NoRoute { code }) => {
                debug!(%code, "Mapbox found no route");
                Ok(Directions {
                    routes: Vec::new(),
                    waypoints: Vec::new(),
                })
            },
            Err(e) => Err(from_mapbox(e)),
        }
    }
}
