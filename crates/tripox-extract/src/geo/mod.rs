// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

pub mod data;

use crate::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        }
    }

    /// Smallest box holding every point, or `None` for an empty input.
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinates>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::new(first.lat, first.lat, first.lng, first.lng);
        for p in iter {
            bounds.min_lat = bounds.min_lat.min(p.lat);
            bounds.max_lat = bounds.max_lat.max(p.lat);
            bounds.min_lng = bounds.min_lng.min(p.lng);
            bounds.max_lng = bounds.max_lng.max(p.lng);
        }
        Some(bounds)
    }

    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }

    pub fn center(&self) -> Coordinates {
        Coordinates::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

/// A named point in the gazetteer. `area` is informational only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
}

impl Place {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
            area: None,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}

/// Immutable table of known place names, kept in declaration order.
///
/// Lookups are exact and case-sensitive. Clones share the underlying storage.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    places: Arc<Vec<Place>>,
    index: Arc<HashMap<String, usize>>,
}

impl Gazetteer {
    pub fn new(places: Vec<Place>) -> Result<Self> {
        let mut index = HashMap::with_capacity(places.len());
        for (i, place) in places.iter().enumerate() {
            if place.name.is_empty() {
                return Err(ExtractError::EmptyPlaceName);
            }
            if !place.coordinates().is_valid() {
                return Err(ExtractError::InvalidCoordinates {
                    name: place.name.clone(),
                    lat: place.lat,
                    lng: place.lng,
                });
            }
            if index.insert(place.name.clone(), i).is_some() {
                return Err(ExtractError::DuplicatePlace(place.name.clone()));
            }
        }
        Ok(Self {
            places: Arc::new(places),
            index: Arc::new(index),
        })
    }

    /// The built-in Goa table.
    pub fn goa() -> Self {
        data::goa().clone()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let places: Vec<Place> = serde_json::from_str(json)?;
        Self::new(places)
    }

    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("[Gazetteer] Loading places from: {:?}", path);
        let content = fs::read_to_string(path)?;
        let gazetteer = Self::from_json_str(&content)?;
        log::debug!("[Gazetteer] Loaded {} places", gazetteer.len());
        Ok(gazetteer)
    }

    pub fn get(&self, name: &str) -> Option<&Place> {
        self.index.get(name).map(|&i| &self.places[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Place> {
        self.places.iter()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Area labels in first-seen order.
    pub fn areas(&self) -> Vec<&str> {
        let mut areas: Vec<&str> = Vec::new();
        for area in self.places.iter().filter_map(|p| p.area.as_deref()) {
            if !areas.contains(&area) {
                areas.push(area);
            }
        }
        areas
    }

    /// Places whose area matches (case-insensitive).
    pub fn in_area(&self, area: &str) -> Vec<&Place> {
        let area_lower = area.to_lowercase();
        self.places
            .iter()
            .filter(|p| {
                p.area
                    .as_deref()
                    .map(|a| a.to_lowercase() == area_lower)
                    .unwrap_or(false)
            })
            .collect()
    }
}
