// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Gazetteer place name is empty")]
    EmptyPlaceName,
    #[error("Duplicate gazetteer place: {0}")]
    DuplicatePlace(String),
    #[error("Invalid coordinates for {name}: ({lat}, {lng})")]
    InvalidCoordinates { name: String, lat: f64, lng: f64 },
    #[error("Invalid trip request: {0}")]
    InvalidRequest(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
