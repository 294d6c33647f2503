// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::criteria::{CriteriaError, SearchCriteria};
use crate::domain::models::offer::{OfferCategory, OfferRecord};
use crate::domain::models::search_record::SearchRecord;
use crate::domain::repositories::search_repository::{RepositoryError, SearchRepository};
use crate::domain::services::ranker;
use crate::infrastructure::sites::aggregator::OfferAggregator;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum SearchServiceError {
    #[error("Invalid search criteria: {0}")]
    InvalidCriteria(#[from] CriteriaError),
}

/// One finished search: the computed record plus, when the store
/// misbehaved, the persistence failure carried beside it. Ranking
/// results are never discarded because a save failed.
#[derive(Debug)]
pub struct SearchOutcome {
    pub record: SearchRecord,
    pub persistence_error: Option<RepositoryError>,
}

/// Top-level search use case: validate, aggregate, rank per category,
/// hand off to the store once, return the assembled record.
pub struct SearchService<R> {
    aggregator: OfferAggregator,
    repository: Arc<R>,
}

impl<R> SearchService<R>
where
    R: SearchRepository + 'static,
{
    pub fn new(aggregator: OfferAggregator, repository: Arc<R>) -> Self {
        Self {
            aggregator,
            repository,
        }
    }

    pub async fn execute(
        &self,
        criteria: SearchCriteria,
        user_id: Option<Uuid>,
    ) -> Result<SearchOutcome, SearchServiceError> {
        // Fail fast before any network activity
        criteria.validate()?;

        let offers = self.aggregator.run(&criteria).await;
        info!(
            "Search for {} aggregated {} offers from {} sites",
            criteria.destination,
            offers.len(),
            self.aggregator.adapter_count()
        );

        let flights: Vec<OfferRecord> = offers
            .iter()
            .filter(|o| o.category == OfferCategory::Flight)
            .cloned()
            .collect();
        let accommodations: Vec<OfferRecord> = offers
            .iter()
            .filter(|o| o.category == OfferCategory::Accommodation)
            .cloned()
            .collect();

        let best_flight = ranker::select_best(&flights).cloned();
        let best_accommodation = ranker::select_best(&accommodations).cloned();

        // Persistence handoff happens exactly once, after ranking. The
        // selection itself is re-derivable from the stored offers.
        let mut persistence_error = None;
        let search_id = match self.repository.save_search(&criteria, user_id).await {
            Ok(id) => {
                if let Err(e) = self.repository.save_results(id, &offers).await {
                    warn!("Failed to persist offers for search {}: {}", id, e);
                    persistence_error = Some(e);
                }
                id
            }
            Err(e) => {
                warn!("Failed to persist search: {}", e);
                persistence_error = Some(e);
                Uuid::new_v4()
            }
        };

        let record = SearchRecord::new(
            search_id,
            criteria,
            best_flight,
            best_accommodation,
            flights,
            accommodations,
        );

        Ok(SearchOutcome {
            record,
            persistence_error,
        })
    }
}

#[cfg(test)]
#[path = "search_service_test.rs"]
mod tests;
