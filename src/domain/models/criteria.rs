// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CriteriaError {
    #[error("Destination cannot be empty")]
    EmptyDestination,
    #[error("End date must be after start date")]
    DateOrder,
    #[error("At least one guest is required")]
    NoGuests,
    #[error("Budget cannot be negative")]
    NegativeBudget,
}

/// One search request as the engine sees it. Immutable once constructed;
/// `origin` gates flight search — no origin, no flight queries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchCriteria {
    pub destination: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub guests: u32,
    pub budget: f64,
    pub origin: Option<String>,
}

impl SearchCriteria {
    pub fn validate(&self) -> Result<(), CriteriaError> {
        if self.destination.trim().is_empty() {
            return Err(CriteriaError::EmptyDestination);
        }
        if self.end_date <= self.start_date {
            return Err(CriteriaError::DateOrder);
        }
        if self.guests == 0 {
            return Err(CriteriaError::NoGuests);
        }
        if self.budget < 0.0 {
            return Err(CriteriaError::NegativeBudget);
        }
        Ok(())
    }

    /// Check-in date formatted the way site query strings expect it
    pub fn start_date_param(&self) -> String {
        self.start_date.format("%Y-%m-%d").to_string()
    }

    /// Check-out date formatted the way site query strings expect it
    pub fn end_date_param(&self) -> String {
        self.end_date.format("%Y-%m-%d").to_string()
    }
}
