//! Domain entities - Request-scoped shapes produced from provider payloads

mod place;
mod route;
mod transit_point;

pub use place::{PlaceResult, PointGeometry};
pub use route::{
    Directions, FormattedLeg, LineString, Maneuver, Route, RouteLeg, RouteResult, RouteStep,
    RouteSummary, Step, Waypoint, format_distance_km, format_duration_min,
};
pub use transit_point::{TransitKind, TransitPoint};
