// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use serde::Serialize;
use tripox_extract::{BoundingBox, Coordinates, TripPlan};

/// Map centre used before any stop is known (centre of India).
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    lat: 22.9734,
    lng: 78.6569,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub description: String,
    pub day: u32,
}

impl MapMarker {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}

/// Everything a map widget needs to show a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub markers: Vec<MapMarker>,
    /// Encloses every marker; `None` for an empty plan.
    pub bounds: Option<BoundingBox>,
    /// First marker, or [`DEFAULT_CENTER`] when there are none.
    pub center: Coordinates,
    /// `[lat, lng]` pairs in visiting order.
    pub route: Vec<[f64; 2]>,
}

impl MapView {
    pub fn from_plan(plan: &TripPlan) -> Self {
        let markers: Vec<MapMarker> = plan
            .days
            .iter()
            .flat_map(|day| {
                day.locations.iter().map(move |loc| MapMarker {
                    name: loc.name.clone(),
                    lat: loc.lat,
                    lng: loc.lng,
                    description: loc.description.clone(),
                    day: day.day,
                })
            })
            .collect();

        let bounds = BoundingBox::enclosing(markers.iter().map(MapMarker::coordinates));
        // Widgets open on the first stop and then fit the bounds
        let center = markers
            .first()
            .map(MapMarker::coordinates)
            .unwrap_or(DEFAULT_CENTER);
        let route = markers.iter().map(|m| [m.lat, m.lng]).collect();

        Self {
            markers,
            bounds,
            center,
            route,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
