//! Directions between two points

use std::sync::Arc;

use domain::{GeoLocation, RouteResult, TravelProfile};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::DirectionsPort;

/// Computes the top route and formats its steps
pub struct DirectionsService {
    port: Arc<dyn DirectionsPort>,
}

impl std::fmt::Debug for DirectionsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionsService")
            .field("port", &"<DirectionsPort>")
            .finish()
    }
}

impl DirectionsService {
    pub fn new(port: Arc<dyn DirectionsPort>) -> Self {
        Self { port }
    }

    /// Route between two `lon,lat` strings
    ///
    /// # Errors
    ///
    /// - `Validation` when a point is missing, `Domain` when one is malformed
    ///   or the profile is unknown
    /// - `NotFound` when the provider returned no route
    /// - `ExternalService` on provider failure
    #[instrument(skip(self))]
    pub async fn directions(
        &self,
        from: Option<&str>,
        to: Option<&str>,
        profile: Option<&str>,
    ) -> Result<RouteResult, ApplicationError> {
        let from = required(from, "from")?;
        let to = required(to, "to")?;
        let from = GeoLocation::parse_lon_lat(from)?;
        let to = GeoLocation::parse_lon_lat(to)?;
        let profile = match profile.map(str::trim).filter(|p| !p.is_empty()) {
            Some(p) => p.parse::<TravelProfile>()?,
            None => TravelProfile::default(),
        };

        let directions = self.port.directions(from, to, profile).await?;

        let route = directions
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| ApplicationError::NotFound("No route found".to_string()))?;

        debug!(
            distance = route.distance(),
            duration = route.duration(),
            points = route.geometry.len(),
            "Route computed"
        );

        Ok(RouteResult::from_route(route, directions.waypoints))
    }
}

fn required<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, ApplicationError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApplicationError::missing_parameter(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockDirectionsPort;
    use domain::{Directions, LineString, Maneuver, Route, RouteLeg, RouteStep, Waypoint};

    fn sample_directions() -> Directions {
        let steps = vec![
            RouteStep::new(
                1500.0,
                180.0,
                Maneuver {
                    kind: "depart".to_string(),
                    modifier: None,
                    instruction: "Départ".to_string(),
                },
            ),
            RouteStep::new(
                2600.0,
                200.0,
                Maneuver {
                    kind: "arrive".to_string(),
                    modifier: Some("right".to_string()),
                    instruction: "Arrivée".to_string(),
                },
            ),
        ];
        let geometry = LineString::new(vec![
            GeoLocation::from_lon_lat(-4.065, 5.335).unwrap(),
            GeoLocation::from_lon_lat(-4.025, 5.325).unwrap(),
        ]);
        Directions {
            routes: vec![Route::new(
                4100.0,
                380.0,
                geometry,
                vec![RouteLeg::new("Autoroute du Nord".to_string(), 4100.0, 380.0, steps)],
            )],
            waypoints: vec![Waypoint {
                name: String::new(),
                location: GeoLocation::from_lon_lat(-4.065, 5.335).unwrap(),
                distance: None,
            }],
        }
    }

    #[tokio::test]
    async fn missing_from_is_validation_error() {
        let mut mock = MockDirectionsPort::new();
        mock.expect_directions().never();
        let svc = DirectionsService::new(Arc::new(mock));

        let err = svc.directions(None, Some("-4.025,5.325"), None).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)));
        assert!(err.to_string().contains("'from'"));
    }

    #[tokio::test]
    async fn missing_to_is_validation_error() {
        let mut mock = MockDirectionsPort::new();
        mock.expect_directions().never();
        let svc = DirectionsService::new(Arc::new(mock));

        let err = svc.directions(Some("-4.065,5.335"), Some(""), None).await.unwrap_err();
        assert!(err.to_string().contains("'to'"));
    }

    #[tokio::test]
    async fn malformed_point_is_domain_error() {
        let mut mock = MockDirectionsPort::new();
        mock.expect_directions().never();
        let svc = DirectionsService::new(Arc::new(mock));

        let err = svc.directions(Some("Yopougon"), Some("-4.025,5.325"), None).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Domain(_)));
    }

    #[tokio::test]
    async fn unknown_profile_rejected() {
        let mut mock = MockDirectionsPort::new();
        mock.expect_directions().never();
        let svc = DirectionsService::new(Arc::new(mock));

        let err = svc
            .directions(Some("-4.065,5.335"), Some("-4.025,5.325"), Some("boat"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Domain(_)));
    }

    #[tokio::test]
    async fn points_are_passed_lon_lat() {
        let mut mock = MockDirectionsPort::new();
        mock.expect_directions()
            .withf(|from, to, profile| {
                from.lon_lat() == [-4.065, 5.335]
                    && to.lon_lat() == [-4.025, 5.325]
                    && *profile == TravelProfile::Walking
            })
            .returning(|_, _, _| Ok(sample_directions()));
        let svc = DirectionsService::new(Arc::new(mock));

        let result = svc
            .directions(Some("-4.065,5.335"), Some("-4.025,5.325"), Some("walking"))
            .await
            .unwrap();

        assert!(result.route.distance > 0.0);
        assert!(result.route.duration > 0.0);
        let steps = &result.legs[0].steps;
        assert_eq!(steps[0].number, 1);
        assert_eq!(steps[1].number, 2);
        assert_eq!(steps[0].distance, "1.5 km");
        assert_eq!(steps[0].duration, "3 min");
        assert_eq!(result.waypoints.len(), 1);
    }

    #[tokio::test]
    async fn no_routes_is_not_found() {
        let mut mock = MockDirectionsPort::new();
        mock.expect_directions().returning(|_, _, _| {
            Ok(Directions {
                routes: vec![],
                waypoints: vec![],
            })
        });
        let svc = DirectionsService::new(Arc::new(mock));

        let err = svc
            .directions(Some("-4.065,5.335"), Some("-4.065,5.335"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)));
    }

    #[tokio::test]
    async fn provider_error_propagates() {
        let mut mock = MockDirectionsPort::new();
        mock.expect_directions()
            .returning(|_, _, _| Err(ApplicationError::external("mapbox", "boom")));
        let svc = DirectionsService::new(Arc::new(mock));

        let err = svc
            .directions(Some("-4.065,5.335"), Some("-4.025,5.325"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalService { .. }));
    }
}
