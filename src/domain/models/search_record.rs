// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::criteria::SearchCriteria;
use crate::domain::models::offer::OfferRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The aggregate outcome of one search: every offer found, plus the
/// best pick per category. Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRecord {
    pub id: Uuid,
    pub criteria: SearchCriteria,
    pub best_flight: Option<OfferRecord>,
    pub best_accommodation: Option<OfferRecord>,
    pub all_flights: Vec<OfferRecord>,
    pub all_accommodations: Vec<OfferRecord>,
    pub total_found: usize,
    pub created_at: DateTime<Utc>,
}

impl SearchRecord {
    /// `total_found` is always derived from the two category lists.
    pub fn new(
        id: Uuid,
        criteria: SearchCriteria,
        best_flight: Option<OfferRecord>,
        best_accommodation: Option<OfferRecord>,
        all_flights: Vec<OfferRecord>,
        all_accommodations: Vec<OfferRecord>,
    ) -> Self {
        let total_found = all_flights.len() + all_accommodations.len();
        Self {
            id,
            criteria,
            best_flight,
            best_accommodation,
            all_flights,
            all_accommodations,
            total_found,
            created_at: Utc::now(),
        }
    }
}
