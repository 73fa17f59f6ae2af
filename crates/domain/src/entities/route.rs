//! Routes, legs and turn-by-turn steps
//!
//! Provider adapters produce [`Directions`]; the gateway turns the first
//! route into a [`RouteResult`] whose steps carry display-ready strings.

use serde::Serialize;

use crate::value_objects::GeoLocation;

/// GeoJSON line geometry
///
/// The one geometry shape routes carry past the provider adapters; encoded
/// polylines are decoded before a `LineString` is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct LineString {
    pub coordinates: Vec<GeoLocation>,
}

impl LineString {
    #[must_use]
    pub const fn new(coordinates: Vec<GeoLocation>) -> Self {
        Self { coordinates }
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

/// Maneuver at the start of a step, passed through from the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Maneuver {
    /// Maneuver type such as `depart`, `turn`, `arrive`
    pub kind: String,
    pub modifier: Option<String>,
    pub instruction: String,
}

/// One raw step of a route leg
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStep {
    distance: f64,
    duration: f64,
    pub maneuver: Maneuver,
}

impl RouteStep {
    /// Negative or non-finite values from the provider become zero
    #[must_use]
    pub fn new(distance: f64, duration: f64, maneuver: Maneuver) -> Self {
        Self {
            distance: non_negative(distance),
            duration: non_negative(duration),
            maneuver,
        }
    }

    /// Meters
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Seconds
    pub const fn duration(&self) -> f64 {
        self.duration
    }
}

/// A leg between two waypoints
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLeg {
    pub summary: String,
    distance: f64,
    duration: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteLeg {
    #[must_use]
    pub fn new(summary: String, distance: f64, duration: f64, steps: Vec<RouteStep>) -> Self {
        Self {
            summary,
            distance: non_negative(distance),
            duration: non_negative(duration),
            steps,
        }
    }

    pub const fn distance(&self) -> f64 {
        self.distance
    }

    pub const fn duration(&self) -> f64 {
        self.duration
    }
}

/// A computed route candidate
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    distance: f64,
    duration: f64,
    pub geometry: LineString,
    pub legs: Vec<RouteLeg>,
}

impl Route {
    #[must_use]
    pub fn new(distance: f64, duration: f64, geometry: LineString, legs: Vec<RouteLeg>) -> Self {
        Self {
            distance: non_negative(distance),
            duration: non_negative(duration),
            geometry,
            legs,
        }
    }

    pub const fn distance(&self) -> f64 {
        self.distance
    }

    pub const fn duration(&self) -> f64 {
        self.duration
    }
}

/// Snapped input point returned alongside routes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waypoint {
    pub name: String,
    pub location: GeoLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// Provider answer to a directions request, routes ordered best first
#[derive(Debug, Clone, PartialEq)]
pub struct Directions {
    pub routes: Vec<Route>,
    pub waypoints: Vec<Waypoint>,
}

/// Display-ready step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// 1-based position within the leg
    pub number: usize,
    pub instruction: String,
    pub distance: String,
    pub duration: String,
    pub maneuver: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
}

impl Step {
    #[must_use]
    pub fn from_route_step(index: usize, step: &RouteStep) -> Self {
        Self {
            number: index + 1,
            instruction: step.maneuver.instruction.clone(),
            distance: format_distance_km(step.distance()),
            duration: format_duration_min(step.duration()),
            maneuver: step.maneuver.kind.clone(),
            modifier: step.maneuver.modifier.clone(),
        }
    }
}

/// Route totals and geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub distance: f64,
    pub duration: f64,
    pub geometry: LineString,
}

/// Leg with formatted steps
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedLeg {
    pub summary: String,
    pub steps: Vec<Step>,
    pub distance: f64,
    pub duration: f64,
}

/// The route handed back to callers: the top candidate with its first leg
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub route: RouteSummary,
    pub legs: Vec<FormattedLeg>,
    pub waypoints: Vec<Waypoint>,
}

impl RouteResult {
    /// Build from a route candidate
    ///
    /// Only the first leg is reported; a two-point request never has more.
    #[must_use]
    pub fn from_route(route: Route, waypoints: Vec<Waypoint>) -> Self {
        let legs = route
            .legs
            .first()
            .map(|leg| FormattedLeg {
                summary: leg.summary.clone(),
                steps: leg
                    .steps
                    .iter()
                    .enumerate()
                    .map(|(i, step)| Step::from_route_step(i, step))
                    .collect(),
                distance: leg.distance(),
                duration: leg.duration(),
            })
            .into_iter()
            .collect();

        Self {
            route: RouteSummary {
                distance: route.distance(),
                duration: route.duration(),
                geometry: route.geometry,
            },
            legs,
            waypoints,
        }
    }
}

/// Meters to kilometers with one decimal, e.g. `"1.3 km"`
#[must_use]
pub fn format_distance_km(meters: f64) -> String {
    format!("{:.1} km", non_negative(meters) / 1000.0)
}

/// Seconds to whole minutes, e.g. `"4 min"`
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_duration_min(seconds: f64) -> String {
    let minutes = (non_negative(seconds) / 60.0).round() as u64;
    format!("{minutes} min")
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}
