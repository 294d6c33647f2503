// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::criteria::SearchCriteria;
use crate::domain::models::offer::OfferRecord;
use crate::domain::services::search_service::SearchOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SearchRequestDto {
    #[validate(length(min = 1, message = "Destination cannot be empty"))]
    pub destination: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[validate(range(min = 1))]
    pub guests: u32,
    #[validate(range(min = 0.0))]
    pub budget: f64,
    pub origin: Option<String>, // Presence gates flight search
    pub user_id: Option<Uuid>,
}

impl SearchRequestDto {
    // Date ordering is enforced by the domain criteria, not here
    pub fn into_criteria(self) -> (SearchCriteria, Option<Uuid>) {
        let user_id = self.user_id;
        let criteria = SearchCriteria {
            destination: self.destination,
            start_date: self.start_date,
            end_date: self.end_date,
            guests: self.guests,
            budget: self.budget,
            origin: self.origin,
        };
        (criteria, user_id)
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponseDto {
    pub id: Uuid,
    pub best_flight: Option<OfferRecord>,
    pub best_accommodation: Option<OfferRecord>,
    pub all_flights: Vec<OfferRecord>,
    pub all_accommodations: Vec<OfferRecord>,
    pub total_found: usize,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence_error: Option<String>,
}

impl From<SearchOutcome> for SearchResponseDto {
    fn from(outcome: SearchOutcome) -> Self {
        let record = outcome.record;
        Self {
            id: record.id,
            best_flight: record.best_flight,
            best_accommodation: record.best_accommodation,
            all_flights: record.all_flights,
            all_accommodations: record.all_accommodations,
            total_found: record.total_found,
            created_at: record.created_at,
            persistence_error: outcome.persistence_error.map(|e| e.to_string()),
        }
    }
}
