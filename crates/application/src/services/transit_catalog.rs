//! Curated gbaka and wôrô-wôrô departure points

use std::sync::Arc;

use domain::{GeoLocation, TransitKind, TransitPoint};

/// Read-only table of transit points, built once and shared
#[derive(Debug, Clone)]
pub struct TransitCatalog {
    points: Arc<[TransitPoint]>,
}

impl TransitCatalog {
    pub fn new(points: Vec<TransitPoint>) -> Self {
        Self {
            points: points.into(),
        }
    }

    /// Every point, in table order
    pub fn all(&self) -> &[TransitPoint] {
        &self.points
    }

    /// Points whose type matches `kind`
    ///
    /// An unrecognised type yields an empty list rather than an error.
    pub fn filter_by_type(&self, kind: &str) -> Vec<TransitPoint> {
        kind.parse::<TransitKind>().map_or_else(
            |_| Vec::new(),
            |kind| {
                self.points
                    .iter()
                    .filter(|p| p.kind == kind)
                    .cloned()
                    .collect()
            },
        )
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for TransitCatalog {
    /// The Abidjan network
    fn default() -> Self {
        Self::new(vec![
            point(
                1,
                "Gare Gbaka Yopougon",
                TransitKind::Gbaka,
                (-4.065, 5.335),
                "Gare principale de Yopougon - Départ toutes les 5 min",
                300,
                "5min",
                "#f97316",
                &["Plateau", "Cocody", "Marcory"],
            ),
            point(
                2,
                "Arrêt Wôrô-wôrô Cocody",
                TransitKind::Woroworo,
                (-4.055, 5.345),
                "Arrêt taxi partagé - Riviera Golf",
                400,
                "2min",
                "#3b82f6",
                &["Plateau", "Marcory", "Treichville"],
            ),
            point(
                3,
                "Gare Plateau",
                TransitKind::Gbaka,
                (-4.025, 5.325),
                "Terminus Plateau - Rue du Commerce",
                300,
                "10min",
                "#f97316",
                &["Yopougon", "Cocody", "Adjamé"],
            ),
            point(
                4,
                "Station Adjamé",
                TransitKind::Gbaka,
                (-4.035, 5.355),
                "Grande station - Toutes destinations",
                250,
                "3min",
                "#10b981",
                &["Yopougon", "Plateau", "Cocody", "Marcory", "Treichville"],
            ),
            point(
                5,
                "Arrêt Marcory",
                TransitKind::Woroworo,
                (-4.015, 5.315),
                "Marché Marcory - Taxis vers Plateau",
                350,
                "5min",
                "#8b5cf6",
                &["Plateau", "Cocody", "Treichville"],
            ),
        ])
    }
}

#[allow(clippy::too_many_arguments)]
fn point(
    id: u32,
    name: &str,
    kind: TransitKind,
    (lon, lat): (f64, f64),
    description: &str,
    price: u32,
    frequency: &str,
    color: &str,
    routes: &[&str],
) -> TransitPoint {
    let icon = match kind {
        TransitKind::Gbaka => "🚌",
        TransitKind::Woroworo => "🚖",
    };

    TransitPoint {
        id,
        name: name.to_string(),
        kind,
        coordinates: GeoLocation::new_unchecked(lat, lon),
        description: description.to_string(),
        price,
        frequency: frequency.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        routes: routes.iter().map(|r| (*r).to_string()).collect(),
    }
}
