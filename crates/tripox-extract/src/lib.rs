// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod details;
pub mod error;
pub mod extract;
pub mod geo;
pub mod plan;
pub mod request;
pub mod rules;

pub use details::DetailMiner;
pub use error::ExtractError;
pub use extract::Mention;
pub use geo::{BoundingBox, Coordinates, Gazetteer, Place};
pub use plan::{DayPlan, PlanContext, PlannedLocation, TripPlan};
pub use request::TripRequest;
pub use rules::{
    ExtractionRules, RegionFallback, CURRENT_SCHEMA_VERSION, MAX_FALLBACK_DAY_SCAN_LIMIT,
};

/// Turns itinerary text into a [`TripPlan`] using a gazetteer and a rule set.
///
/// Holds only immutable state, so one instance can serve many threads.
#[derive(Debug, Clone)]
pub struct TripProcessor {
    gazetteer: Gazetteer,
    miner: Arc<DetailMiner>,
    context: PlanContext,
    rules_path: PathBuf,
}

impl Default for TripProcessor {
    fn default() -> Self {
        Self::at_path(ExtractionRules::default_path())
    }
}

impl TripProcessor {
    /// Loads rules from `path`, falling back to the defaults if the file is unusable.
    pub fn at_path(path: PathBuf) -> Self {
        let rules = ExtractionRules::load(&path).unwrap_or_else(|e| {
            log::warn!("[Processor] Using default rules, failed to load {:?}: {}", path, e);
            ExtractionRules::default()
        });
        Self {
            gazetteer: Gazetteer::goa(),
            miner: Arc::new(DetailMiner::new(rules)),
            context: PlanContext::default(),
            rules_path: path,
        }
    }

    /// Never touches the filesystem.
    pub fn in_memory(gazetteer: Gazetteer, rules: ExtractionRules) -> Self {
        Self {
            gazetteer,
            miner: Arc::new(DetailMiner::new(rules)),
            context: PlanContext::default(),
            rules_path: ExtractionRules::default_path(),
        }
    }

    pub fn with_gazetteer(mut self, gazetteer: Gazetteer) -> Self {
        self.gazetteer = gazetteer;
        self
    }

    pub fn with_context(mut self, context: PlanContext) -> Self {
        self.context = context;
        self
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    pub fn rules(&self) -> &ExtractionRules {
        self.miner.rules()
    }

    pub fn rules_path(&self) -> &Path {
        &self.rules_path
    }

    pub fn update_rules(&mut self, rules: ExtractionRules) {
        self.miner = Arc::new(DetailMiner::new(rules));
    }

    pub fn save(&self) -> Result<()> {
        self.rules().save(&self.rules_path)
    }

    pub fn reset_defaults(&mut self) -> Result<()> {
        self.update_rules(ExtractionRules::default());
        self.save()
    }

    pub fn extract_locations(&self, text: &str) -> Vec<Mention> {
        extract::extract_mentions(text, &self.gazetteer, self.rules().day_scan_limit())
    }

    /// Never fails: unrecognised text gives a plan with no days.
    pub fn process(&self, text: &str) -> TripPlan {
        let mentions = self.extract_locations(text);
        let plan = plan::assemble(text, mentions, &self.miner, &self.context);
        log::debug!(
            "[Processor] Built plan with {} days, {} locations",
            plan.days.len(),
            plan.location_count()
        );
        plan
    }
}

/// Processes text against the built-in Goa gazetteer and default rules.
pub fn process_trip_response(text: &str) -> TripPlan {
    TripProcessor::in_memory(Gazetteer::goa(), ExtractionRules::default()).process(text)
}
