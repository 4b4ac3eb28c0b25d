// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// When a user's file has a lower version, its keyword lists are reset on load.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Upper bound for the "Day 1".."Day N" scan used when no structured headings match.
pub const DEFAULT_FALLBACK_DAY_SCAN_LIMIT: u32 = 5;

/// Largest scan limit honoured; one "Day N" search per step, per place.
pub const MAX_FALLBACK_DAY_SCAN_LIMIT: u32 = 366;

/// Static accommodation/food answers for places the text says nothing about.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RegionFallback {
    pub name: String,
    pub places: Vec<String>,
    pub accommodation: Option<String>,
    pub food: Option<String>,
}

impl RegionFallback {
    pub fn covers(&self, place: &str) -> bool {
        self.places.iter().any(|p| p == place)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ExtractionRules {
    pub activity_keywords: Vec<String>,
    pub accommodation_keywords: Vec<String>,
    pub food_keywords: Vec<String>,
    /// Matched verbatim (case-sensitive) inside food sentences.
    pub known_restaurants: Vec<String>,
    pub region_fallbacks: Vec<RegionFallback>,
    #[serde(default = "default_scan_limit")]
    pub fallback_day_scan_limit: u32,
    #[serde(default)]
    pub schema_version: u32,
}

fn default_scan_limit() -> u32 {
    DEFAULT_FALLBACK_DAY_SCAN_LIMIT
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self {
            activity_keywords: strings(&[
                "swimming",
                "sunset",
                "sunrise",
                "party",
                "nightlife",
                "water sports",
                "parasailing",
                "jet-skiing",
                "dolphin",
                "kayaking",
                "shopping",
                "market",
                "tour",
                "cruise",
                "boat trip",
            ]),
            accommodation_keywords: strings(&[
                "hotel",
                "resort",
                "stay",
                "beach hut",
                "accommodation",
            ]),
            food_keywords: strings(&[
                "restaurant",
                "eat",
                "dinner",
                "lunch",
                "breakfast",
                "food",
                "cuisine",
            ]),
            known_restaurants: strings(&["Thalassa", "Brittos", "St. Anthony's", "Curlies"]),
            region_fallbacks: vec![
                RegionFallback {
                    name: "North Goa".to_string(),
                    places: strings(&["Anjuna", "Vagator", "Baga", "Calangute"]),
                    accommodation: Some("North Goa Hotel".to_string()),
                    food: Some("Beachside Seafood".to_string()),
                },
                RegionFallback {
                    name: "South Goa".to_string(),
                    places: strings(&["Palolem", "Agonda"]),
                    accommodation: Some("South Goa Beach Hut".to_string()),
                    food: Some("Authentic Goan Curry".to_string()),
                },
            ],
            fallback_day_scan_limit: DEFAULT_FALLBACK_DAY_SCAN_LIMIT,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }
}

impl ExtractionRules {
    /// First region fallback listing `place`.
    pub fn region_for(&self, place: &str) -> Option<&RegionFallback> {
        self.region_fallbacks.iter().find(|r| r.covers(place))
    }

    /// Scan limit actually used, whatever the struct was built from.
    pub fn day_scan_limit(&self) -> u32 {
        self.fallback_day_scan_limit.min(MAX_FALLBACK_DAY_SCAN_LIMIT)
    }

    pub fn default_path() -> PathBuf {
        ProjectDirs::from("org", "tripox", "tripox")
            .map(|dirs| dirs.config_dir().join("extraction_rules.json"))
            .unwrap_or_else(|| PathBuf::from("extraction_rules.json"))
    }

    /// Loads rules from `path`, migrating older schemas in place.
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let abs_path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        log::debug!("[Rules] Loading extraction rules from: {:?}", abs_path);
        if !path.exists() {
            log::debug!("[Rules] No rules file found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let mut rules: ExtractionRules = serde_json::from_str(&content).map_err(|e| {
            log::error!("[Rules] JSON parse error for {:?}: {}", path, e);
            e
        })?;

        if rules.schema_version < CURRENT_SCHEMA_VERSION {
            log::info!(
                "[Rules] Migrating extraction rules from schema v{} to v{}",
                rules.schema_version,
                CURRENT_SCHEMA_VERSION
            );

            // v0 files predate schema_version; their keyword lists are replaced.
            // Region fallbacks and restaurants are user data and survive.
            if rules.schema_version == 0 {
                let defaults = ExtractionRules::default();
                rules.activity_keywords = defaults.activity_keywords;
                rules.accommodation_keywords = defaults.accommodation_keywords;
                rules.food_keywords = defaults.food_keywords;
                log::info!("[Rules] v0→v1: Reset keyword lists to defaults");
            }

            rules.schema_version = CURRENT_SCHEMA_VERSION;
            if let Err(e) = rules.save(path) {
                log::warn!("[Rules] Could not persist migrated rules: {}", e);
            }
        }

        if rules.fallback_day_scan_limit > MAX_FALLBACK_DAY_SCAN_LIMIT {
            log::warn!(
                "[Rules] fallback_day_scan_limit {} too large, clamping to {}",
                rules.fallback_day_scan_limit,
                MAX_FALLBACK_DAY_SCAN_LIMIT
            );
            rules.fallback_day_scan_limit = MAX_FALLBACK_DAY_SCAN_LIMIT;
        }

        log::debug!(
            "[Rules] Loaded {} activity keywords, {} region fallbacks",
            rules.activity_keywords.len(),
            rules.region_fallbacks.len()
        );
        Ok(rules)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        log::debug!("[Rules] Saving extraction rules to {:?}", path);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
