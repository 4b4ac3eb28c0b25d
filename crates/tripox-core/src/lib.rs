// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

pub mod batch;
pub mod digest;
pub mod discovery;
pub mod map;
pub mod roadmap;

use std::path::PathBuf;
use thiserror::Error;

pub use batch::{BatchEntry, BatchProcessor};
pub use digest::{DailyEntry, LocationDigest, PlanDigest};
pub use map::{MapMarker, MapView};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Itinerary directory not found: {0:?}")]
    DirectoryNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
