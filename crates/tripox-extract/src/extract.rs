// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Finds gazetteer places in itinerary text and tags each with a day.
//!
//! Structured `Day N: ... (A/B)` headings are preferred. Only when none of
//! them name a known place does the scan fall back to plain substring search.

use crate::geo::{Gazetteer, Place};
use crate::rules::MAX_FALLBACK_DAY_SCAN_LIMIT;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// One detected occurrence of a gazetteer place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    pub name: String,
    pub day: u32,
    pub lat: f64,
    pub lng: f64,
    pub description: String,
}

impl Mention {
    pub fn new(place: &Place, day: u32) -> Self {
        Self {
            name: place.name.clone(),
            day,
            lat: place.lat,
            lng: place.lng,
            description: placeholder_description(day),
        }
    }
}

pub fn placeholder_description(day: u32) -> String {
    format!("Visit on Day {}", day)
}

fn day_group_re() -> &'static Regex {
    static DAY_GROUP_RE: OnceLock<Regex> = OnceLock::new();
    DAY_GROUP_RE.get_or_init(|| Regex::new(r"Day\s+([0-9]+):.*?\((.*?)\)").unwrap())
}

/// Mentions sorted by day; discovery order is kept within a day.
pub fn extract_mentions(text: &str, gazetteer: &Gazetteer, scan_limit: u32) -> Vec<Mention> {
    let mut mentions = extract_from_headings(text, gazetteer);

    if mentions.is_empty() {
        mentions = extract_by_substring(text, gazetteer, scan_limit);
        log::debug!(
            "[Extract] No structured headings matched, substring scan found {}",
            mentions.len()
        );
    } else {
        log::debug!("[Extract] Headings yielded {} mentions", mentions.len());
    }

    // sort_by_key is stable
    mentions.sort_by_key(|m| m.day);
    mentions
}

/// Primary pass over `Day N: ... (Name/Name)` headings.
pub fn extract_from_headings(text: &str, gazetteer: &Gazetteer) -> Vec<Mention> {
    let mut mentions = Vec::new();

    for caps in day_group_re().captures_iter(text) {
        let day = match caps[1].parse::<u32>() {
            Ok(day) if day > 0 => day,
            _ => {
                log::debug!("[Extract] Skipping malformed heading: {:?}", &caps[0]);
                continue;
            }
        };

        for token in caps[2].split('/') {
            if let Some(place) = gazetteer.get(token.trim()) {
                mentions.push(Mention::new(place, day));
            }
        }
    }

    mentions
}

/// Fallback pass: every place whose name appears anywhere, in gazetteer order.
pub fn extract_by_substring(text: &str, gazetteer: &Gazetteer, scan_limit: u32) -> Vec<Mention> {
    gazetteer
        .iter()
        .filter(|place| text.contains(place.name.as_str()))
        .map(|place| Mention::new(place, guess_day(text, &place.name, scan_limit)))
        .collect()
}

/// First `Day i` (1..=limit) whose first occurrence is followed somewhere by
/// `name`. Defaults to day 1. The limit is capped at
/// [`MAX_FALLBACK_DAY_SCAN_LIMIT`].
pub fn guess_day(text: &str, name: &str, scan_limit: u32) -> u32 {
    (1..=scan_limit.min(MAX_FALLBACK_DAY_SCAN_LIMIT))
        .find(|i| {
            text.find(&format!("Day {}", i))
                .map(|pos| text[pos..].contains(name))
                .unwrap_or(false)
        })
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::DEFAULT_FALLBACK_DAY_SCAN_LIMIT;

    fn extract(text: &str) -> Vec<Mention> {
        extract_mentions(text, &Gazetteer::goa(), DEFAULT_FALLBACK_DAY_SCAN_LIMIT)
    }

    fn names(mentions: &[Mention]) -> Vec<(&str, u32)> {
        mentions.iter().map(|m| (m.name.as_str(), m.day)).collect()
    }

    #[test]
    fn test_heading_with_two_places() {
        let mentions = extract("Day 2: Beach hopping (Anjuna/Baga)");
        assert_eq!(names(&mentions), vec![("Anjuna", 2), ("Baga", 2)]);
        assert_eq!(mentions[0].description, "Visit on Day 2");
        assert!((mentions[1].lat - 15.5566).abs() < 1e-9);
    }

    #[test]
    fn test_heading_tokens_are_trimmed_and_exact() {
        let mentions = extract("Day 1: North ( Vagator / baga / Nowhere / Chapora Fort )");
        assert_eq!(names(&mentions), vec![("Vagator", 1), ("Chapora Fort", 1)]);
    }

    #[test]
    fn test_headings_sorted_by_day_stably() {
        let text = "Day 3: Relax (Palolem)\nDay 1: Arrive (Baga/Calangute)\nDay 2: Culture (Old Goa)";
        let mentions = extract(text);
        assert_eq!(
            names(&mentions),
            vec![("Baga", 1), ("Calangute", 1), ("Old Goa", 2), ("Palolem", 3)]
        );
    }

    #[test]
    fn test_heading_does_not_cross_lines() {
        // The parenthetical must be on the heading's own line
        let text = "Day 1: Arrive early\n(Baga) is lovely";
        let mentions = extract_from_headings(text, &Gazetteer::goa());
        assert!(mentions.is_empty());
    }

    #[test]
    fn test_malformed_heading_skipped() {
        let text = "Day 0: Nothing (Baga)\nDay 99999999999: Overflow (Anjuna)\nDay 2: Fine (Agonda)";
        let mentions = extract(text);
        assert_eq!(names(&mentions), vec![("Agonda", 2)]);
    }

    #[test]
    fn test_fallback_only_when_headings_yield_nothing() {
        // One heading names a known place, so Palolem in prose is ignored
        let text = "Day 1: Arrive (Baga). Later head to Palolem.";
        assert_eq!(names(&extract(text)), vec![("Baga", 1)]);

        // Heading present but with no known place: the substring scan takes over
        let text = "Day 1: Arrive (Somewhere). Later head to Palolem.";
        assert_eq!(names(&extract(text)), vec![("Palolem", 1)]);
    }

    #[test]
    fn test_fallback_day_guess() {
        let text = "Day 1: explore Baga. Day 2: visit Old Goa. Day 3: relax in Palolem.";
        let mentions = extract(text);
        // Every name appears after "Day 1", so the first heading wins for all
        assert_eq!(
            names(&mentions),
            vec![("Baga", 1), ("Old Goa", 1), ("Palolem", 1)]
        );

        let text = "Palolem first. Day 2: then Baga.";
        assert_eq!(guess_day(text, "Baga", 5), 2);
        assert_eq!(guess_day(text, "Palolem", 5), 1);
    }

    #[test]
    fn test_fallback_respects_scan_limit() {
        let text = "Intro. Day 6: Agonda";
        assert_eq!(guess_day(text, "Agonda", 5), 1);
        assert_eq!(guess_day(text, "Agonda", 6), 6);
    }

    #[test]
    fn test_unbounded_scan_limit_is_capped() {
        assert_eq!(guess_day("Palolem. Day 2: Agonda", "Agonda", u32::MAX), 2);
        assert_eq!(guess_day("Agonda only", "Agonda", u32::MAX), 1);

        let mentions = extract_mentions("We visit Baga and Palolem", &Gazetteer::goa(), u32::MAX);
        assert_eq!(names(&mentions), vec![("Baga", 1), ("Palolem", 1)]);
    }

    #[test]
    fn test_fallback_uses_gazetteer_order_and_substrings() {
        // "Anjuna Flea Market" also contains "Anjuna"; both are reported
        let mentions = extract("Shop at Anjuna Flea Market, then Baga.");
        assert_eq!(
            names(&mentions),
            vec![("Anjuna", 1), ("Baga", 1), ("Anjuna Flea Market", 1)]
        );
    }

    #[test]
    fn test_no_matches_and_empty_input() {
        assert!(extract("").is_empty());
        assert!(extract("A quiet week in the mountains.").is_empty());
        // Case-sensitive: lowercase names are not matches
        assert!(extract("we loved baga and palolem").is_empty());
    }

    #[test]
    fn test_synthetic_gazetteer() {
        let gazetteer = Gazetteer::new(vec![
            Place::new("Hampi", 15.335, 76.46),
            Place::new("Gokarna", 14.55, 74.32),
        ])
        .unwrap();
        let mentions = extract_mentions("Day 4: Ruins (Hampi/Baga)", &gazetteer, 5);
        assert_eq!(names(&mentions), vec![("Hampi", 4)]);
    }
}
