// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use serde::Serialize;
use tripox_extract::TripPlan;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyEntry {
    pub day: u32,
    pub food: String,
    pub hotel: String,
    pub activities: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationDigest {
    pub name: String,
    pub description: String,
    pub daily_plan: Vec<DailyEntry>,
}

/// Plan regrouped by location: one entry per place, one daily line per visit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanDigest {
    pub title: String,
    pub duration: String,
    pub locations: Vec<LocationDigest>,
    pub notes: String,
}

impl PlanDigest {
    pub fn from_plan(plan: &TripPlan) -> Self {
        let mut locations: Vec<LocationDigest> = Vec::new();

        for day in &plan.days {
            for loc in &day.locations {
                let entry = DailyEntry {
                    day: day.day,
                    food: or_default(loc.food.as_deref(), "Local cuisine"),
                    hotel: or_default(loc.accommodation.as_deref(), "Not specified"),
                    activities: if loc.activities.is_empty() {
                        "Sightseeing".to_string()
                    } else {
                        loc.activities.join(", ")
                    },
                };

                match locations.iter_mut().find(|l| l.name == loc.name) {
                    Some(existing) => existing.daily_plan.push(entry),
                    None => locations.push(LocationDigest {
                        name: loc.name.clone(),
                        description: if loc.description.is_empty() {
                            format!("Visit {} and explore the surroundings.", loc.name)
                        } else {
                            loc.description.clone()
                        },
                        daily_plan: vec![entry],
                    }),
                }
            }
        }

        Self {
            title: or_default(Some(plan.title.as_str()), "Your Trip Plan"),
            duration: if plan.duration.is_empty() {
                format!("{} Days", plan.days.len().max(1))
            } else {
                plan.duration.clone()
            },
            locations,
            notes: "Enjoy your journey!".to_string(),
        }
    }
}

fn or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripox_extract::{process_trip_response, DayPlan, PlannedLocation};

    fn location(name: &str, day: u32) -> PlannedLocation {
        PlannedLocation {
            name: name.to_string(),
            day,
            lat: 15.0,
            lng: 74.0,
            description: String::new(),
            activities: Vec::new(),
            accommodation: None,
            food: None,
        }
    }

    #[test]
    fn test_repeated_location_is_merged() {
        let plan = process_trip_response(
            "Day 1: (Baga). Day 2: (Baga/Anjuna). Baga has nightlife and a party scene",
        );
        let digest = PlanDigest::from_plan(&plan);
        let names: Vec<&str> = digest.locations.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Baga", "Anjuna"]);

        let baga = &digest.locations[0];
        let days: Vec<u32> = baga.daily_plan.iter().map(|d| d.day).collect();
        assert_eq!(days, vec![1, 2]);
        assert_eq!(baga.daily_plan[0].activities, "Party, Nightlife");
        assert_eq!(baga.daily_plan[0].hotel, "North Goa Hotel");
        assert_eq!(baga.daily_plan[0].food, "Beachside Seafood");
        assert_eq!(digest.title, "Goa Trip");
        assert_eq!(digest.duration, "2 days");
    }

    #[test]
    fn test_defaults_for_missing_details() {
        let plan = TripPlan {
            title: String::new(),
            duration: String::new(),
            overview: String::new(),
            days: vec![DayPlan {
                day: 1,
                title: "Day 1".to_string(),
                locations: vec![location("Ponda", 1)],
            }],
        };
        let digest = PlanDigest::from_plan(&plan);
        assert_eq!(digest.title, "Your Trip Plan");
        assert_eq!(digest.duration, "1 Days");
        assert_eq!(digest.notes, "Enjoy your journey!");

        let ponda = &digest.locations[0];
        assert_eq!(ponda.description, "Visit Ponda and explore the surroundings.");
        assert_eq!(
            ponda.daily_plan[0],
            DailyEntry {
                day: 1,
                food: "Local cuisine".to_string(),
                hotel: "Not specified".to_string(),
                activities: "Sightseeing".to_string(),
            }
        );
    }
}
