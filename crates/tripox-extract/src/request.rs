// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};

/// What the planner form collects before asking the backend for an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub destination: String,
    pub duration_days: u32,
    /// Rupees.
    pub budget: Option<u64>,
}

impl TripRequest {
    pub fn new(destination: impl Into<String>, duration_days: u32) -> Self {
        Self {
            destination: destination.into(),
            duration_days,
            budget: None,
        }
    }

    pub fn with_budget(mut self, budget: u64) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Natural-language prompt sent to the planning backend.
    pub fn query(&self) -> Result<String> {
        let destination = self.destination.trim();
        if destination.is_empty() {
            return Err(ExtractError::InvalidRequest(
                "destination is empty".to_string(),
            ));
        }
        if self.duration_days == 0 {
            return Err(ExtractError::InvalidRequest(
                "trip must last at least one day".to_string(),
            ));
        }

        let mut query = format!(
            "Plan a {}-day trip to {}",
            self.duration_days, destination
        );
        if let Some(budget) = self.budget {
            query.push_str(&format!(" with a budget of ₹{}", budget));
        }
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_with_budget() {
        let request = TripRequest::new("Goa", 4).with_budget(25000);
        assert_eq!(
            request.query().unwrap(),
            "Plan a 4-day trip to Goa with a budget of ₹25000"
        );
    }

    #[test]
    fn test_query_without_budget() {
        let request = TripRequest::new("  North Goa ", 2);
        assert_eq!(request.query().unwrap(), "Plan a 2-day trip to North Goa");
    }

    #[test]
    fn test_invalid_requests() {
        assert!(matches!(
            TripRequest::new("   ", 3).query(),
            Err(ExtractError::InvalidRequest(_))
        ));
        assert!(matches!(
            TripRequest::new("Goa", 0).query(),
            Err(ExtractError::InvalidRequest(_))
        ));
    }
}
