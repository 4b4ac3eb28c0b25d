// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::rules::ExtractionRules;
use regex::Regex;

/// Splits on the literal ". " the way itinerary responses are written.
/// Abbreviations such as "St. Anthony's" get cut in two.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(". ")
}

/// Sentences that mention `name` (case-sensitive).
fn mentioning<'t>(text: &'t str, name: &'t str) -> impl Iterator<Item = &'t str> {
    sentences(text).filter(move |s| s.contains(name))
}

fn contains_any(sentence_lower: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|k| sentence_lower.contains(k.to_lowercase().as_str()))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Builds `"([^"]+)"|Name|Name...` so the leftmost quoted text or known
/// restaurant wins.
fn build_restaurant_regex(rules: &ExtractionRules) -> Option<Regex> {
    let mut pattern = String::from(r#""([^"]+)""#);
    for name in rules.known_restaurants.iter().filter(|n| !n.is_empty()) {
        pattern.push('|');
        pattern.push_str(&regex::escape(name));
    }
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            log::warn!("[Details] Restaurant pattern rejected: {}", e);
            None
        }
    }
}

/// Best-effort per-location detail mining over a rule set.
///
/// Every method is a pure function of its arguments.
#[derive(Debug, Clone)]
pub struct DetailMiner {
    rules: ExtractionRules,
    restaurant_re: Option<Regex>,
}

impl DetailMiner {
    pub fn new(rules: ExtractionRules) -> Self {
        let restaurant_re = build_restaurant_regex(&rules);
        Self {
            rules,
            restaurant_re,
        }
    }

    pub fn rules(&self) -> &ExtractionRules {
        &self.rules
    }

    /// First sentence about `name` that says more than the name itself.
    pub fn description(&self, text: &str, name: &str) -> Option<String> {
        let min_len = name.chars().count() + 10;
        mentioning(text, name)
            .find(|s| s.chars().count() > min_len)
            .map(|s| format!("{}.", s.trim()))
    }

    pub fn activities(&self, text: &str, name: &str) -> Vec<String> {
        let mut activities: Vec<String> = Vec::new();
        for sentence in mentioning(text, name) {
            let lower = sentence.to_lowercase();
            for keyword in &self.rules.activity_keywords {
                if !lower.contains(keyword.to_lowercase().as_str()) {
                    continue;
                }
                let label = capitalize(keyword);
                if !activities.contains(&label) {
                    activities.push(label);
                }
            }
        }
        activities
    }

    pub fn accommodation(&self, text: &str, name: &str) -> Option<String> {
        let mentioned = mentioning(text, name)
            .any(|s| contains_any(&s.to_lowercase(), &self.rules.accommodation_keywords));
        if mentioned {
            return Some(format!("Accommodation near {}", name));
        }

        self.rules
            .region_for(name)
            .and_then(|r| r.accommodation.clone())
    }

    pub fn food(&self, text: &str, name: &str) -> Option<String> {
        let food_sentence = mentioning(text, name)
            .find(|s| contains_any(&s.to_lowercase(), &self.rules.food_keywords));

        if let Some(sentence) = food_sentence {
            let specific = self
                .restaurant_re
                .as_ref()
                .and_then(|re| re.captures(sentence))
                .map(|caps| match caps.get(1) {
                    Some(quoted) => quoted.as_str().to_string(),
                    None => caps[0].to_string(),
                });
            return Some(specific.unwrap_or_else(|| format!("Local restaurant in {}", name)));
        }

        self.rules.region_for(name).and_then(|r| r.food.clone())
    }
}

impl Default for DetailMiner {
    fn default() -> Self {
        Self::new(ExtractionRules::default())
    }
}
