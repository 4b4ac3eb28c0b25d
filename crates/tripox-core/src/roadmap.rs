// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use std::fmt::Write;
use tripox_extract::TripPlan;

pub const EMPTY_ROADMAP: &str = "No itinerary available";

/// Plain-text, day-by-day rendering of a plan.
pub fn render(plan: &TripPlan) -> String {
    if plan.is_empty() {
        return format!("{}\n", EMPTY_ROADMAP);
    }

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "{} ({})", plan.title, plan.duration);
    if !plan.overview.is_empty() {
        let _ = writeln!(out, "{}", plan.overview);
    }

    for day in &plan.days {
        let _ = writeln!(out);
        let _ = writeln!(out, "[{}] {}", day.day, day.title);
        for loc in &day.locations {
            let _ = writeln!(out, "  * {} ({:.4}, {:.4})", loc.name, loc.lat, loc.lng);
            let _ = writeln!(out, "    {}", loc.description);
            if !loc.activities.is_empty() {
                let _ = writeln!(out, "    Activities: {}", loc.activities.join(", "));
            }
            if let Some(stay) = &loc.accommodation {
                let _ = writeln!(out, "    Stay: {}", stay);
            }
            if let Some(food) = &loc.food {
                let _ = writeln!(out, "    Food: {}", food);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripox_extract::process_trip_response;

    #[test]
    fn test_empty_roadmap() {
        assert_eq!(render(&process_trip_response("")), "No itinerary available\n");
    }

    #[test]
    fn test_roadmap_layout() {
        let plan = process_trip_response(
            "Day 1: (Palolem). Relax on Palolem beach, stay at a beach hut, enjoy dolphin watching.",
        );
        let text = render(&plan);
        let expected = "\
Goa Trip (1 days)
Experience the best of North and South Goa

[1] Day 1
  * Palolem (15.0100, 73.9973)
    Relax on Palolem beach, stay at a beach hut, enjoy dolphin watching..
    Activities: Dolphin
    Stay: Accommodation near Palolem
    Food: Authentic Goan Curry
";
        assert_eq!(text, expected);
    }
}
