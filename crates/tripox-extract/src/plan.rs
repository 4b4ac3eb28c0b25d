// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::details::DetailMiner;
use crate::extract::Mention;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_TITLE: &str = "Goa Trip";
pub const DEFAULT_OVERVIEW: &str = "Experience the best of North and South Goa";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub title: String,
    pub duration: String,
    pub overview: String,
    pub days: Vec<DayPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    pub title: String,
    pub locations: Vec<PlannedLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedLocation {
    pub name: String,
    pub day: u32,
    pub lat: f64,
    pub lng: f64,
    pub description: String,
    pub activities: Vec<String>,
    pub accommodation: Option<String>,
    pub food: Option<String>,
}

/// Caller-supplied framing for the plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanContext {
    pub title: String,
    pub overview: String,
}

impl Default for PlanContext {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            overview: DEFAULT_OVERVIEW.to_string(),
        }
    }
}

impl TripPlan {
    /// No recognised places. Callers show "no itinerary available".
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn locations(&self) -> impl Iterator<Item = &PlannedLocation> {
        self.days.iter().flat_map(|d| d.locations.iter())
    }

    pub fn location_count(&self) -> usize {
        self.days.iter().map(|d| d.locations.len()).sum()
    }
}

/// Buckets keyed by day, ascending; each bucket keeps discovery order.
pub fn group_by_day(mentions: Vec<Mention>) -> BTreeMap<u32, Vec<Mention>> {
    let mut buckets: BTreeMap<u32, Vec<Mention>> = BTreeMap::new();
    for mention in mentions {
        buckets.entry(mention.day).or_default().push(mention);
    }
    buckets
}

fn plan_location(text: &str, mention: Mention, miner: &DetailMiner) -> PlannedLocation {
    let description = miner
        .description(text, &mention.name)
        .unwrap_or(mention.description);
    PlannedLocation {
        activities: miner.activities(text, &mention.name),
        accommodation: miner.accommodation(text, &mention.name),
        food: miner.food(text, &mention.name),
        name: mention.name,
        day: mention.day,
        lat: mention.lat,
        lng: mention.lng,
        description,
    }
}

pub fn assemble(
    text: &str,
    mentions: Vec<Mention>,
    miner: &DetailMiner,
    context: &PlanContext,
) -> TripPlan {
    let days: Vec<DayPlan> = group_by_day(mentions)
        .into_iter()
        .map(|(day, bucket)| DayPlan {
            day,
            title: format!("Day {}", day),
            locations: bucket
                .into_iter()
                .map(|m| plan_location(text, m, miner))
                .collect(),
        })
        .collect();

    TripPlan {
        title: context.title.clone(),
        duration: format!("{} days", days.len()),
        overview: context.overview.clone(),
        days,
    }
}
