// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use futures::future::{join_all, BoxFuture};
use metrics::counter;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::models::criteria::SearchCriteria;
use crate::domain::models::offer::OfferRecord;
use crate::domain::search::adapter::{AdapterError, SourceAdapter};

/// Fan-out over every registered site adapter: flights and
/// accommodations are independent units of work (2×N for N adapters),
/// all launched together and joined in full. A failing unit contributes
/// zero records and never aborts its siblings.
pub struct OfferAggregator {
    adapters: Vec<Arc<dyn SourceAdapter>>,
}

type UnitOutcome = (&'static str, &'static str, Result<Vec<OfferRecord>, AdapterError>);

impl OfferAggregator {
    pub fn new(adapters: Vec<Arc<dyn SourceAdapter>>) -> Self {
        Self { adapters }
    }

    pub fn adapter_count(&self) -> usize {
        self.adapters.len()
    }

    /// Run one search across all adapters and merge the successful
    /// results. Cross-adapter ordering is not meaningful; the ranker is
    /// where determinism lives. Every adapter session is released once
    /// the join completes, failed units included.
    pub async fn run(&self, criteria: &SearchCriteria) -> Vec<OfferRecord> {
        let mut units: Vec<BoxFuture<'static, UnitOutcome>> =
            Vec::with_capacity(self.adapters.len() * 2);

        for adapter in &self.adapters {
            let flights_adapter = Arc::clone(adapter);
            let flights_criteria = criteria.clone();
            units.push(Box::pin(async move {
                let outcome = flights_adapter.search_flights(&flights_criteria).await;
                (flights_adapter.name(), "flights", outcome)
            }));

            let stays_adapter = Arc::clone(adapter);
            let stays_criteria = criteria.clone();
            units.push(Box::pin(async move {
                let outcome = stays_adapter.search_accommodations(&stays_criteria).await;
                (stays_adapter.name(), "accommodations", outcome)
            }));
        }

        // Full join: no unit is cancelled because another failed or
        // finished first.
        let outcomes = join_all(units).await;

        let mut offers = Vec::new();
        for (site, operation, outcome) in outcomes {
            match outcome {
                Ok(records) => {
                    if !records.is_empty() {
                        info!("Site {} returned {} {} offers", site, records.len(), operation);
                    }
                    counter!("travelrs_site_offers_total", "site" => site)
                        .increment(records.len() as u64);
                    offers.extend(records);
                }
                Err(e) => {
                    warn!("Site {} {} search failed: {}", site, operation, e);
                    counter!("travelrs_site_failures_total", "site" => site).increment(1);
                }
            }
        }

        for adapter in &self.adapters {
            adapter.release().await;
        }

        offers
    }
}
