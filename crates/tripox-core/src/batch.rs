// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::discovery::discover_itineraries;
use crate::Result;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tripox_extract::{TripPlan, TripProcessor};

/// Outcome for one itinerary file. Exactly one of `plan` / `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<TripPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntry {
    pub fn is_ok(&self) -> bool {
        self.plan.is_some()
    }
}

/// Runs one shared processor over many files in parallel.
pub struct BatchProcessor<'a> {
    processor: &'a TripProcessor,
}

impl<'a> BatchProcessor<'a> {
    pub fn new(processor: &'a TripProcessor) -> Self {
        Self { processor }
    }

    /// Results come back in the order of `paths`.
    pub fn process_files(&self, paths: Vec<PathBuf>) -> Vec<BatchEntry> {
        let processor = self.processor;
        paths
            .into_par_iter()
            .map(|path| match fs::read_to_string(&path) {
                Ok(text) => BatchEntry {
                    plan: Some(processor.process(&text)),
                    error: None,
                    path,
                },
                Err(e) => {
                    log::warn!("[Batch] Could not read {:?}: {}", path, e);
                    BatchEntry {
                        plan: None,
                        error: Some(e.to_string()),
                        path,
                    }
                }
            })
            .collect()
    }

    pub fn process_dir(&self, dir: &Path) -> Result<Vec<BatchEntry>> {
        let paths = discover_itineraries(dir)?;
        log::info!("[Batch] Processing {} itineraries from {:?}", paths.len(), dir);
        Ok(self.process_files(paths))
    }
}
