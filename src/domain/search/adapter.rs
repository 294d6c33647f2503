// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::criteria::SearchCriteria;
use crate::domain::models::offer::OfferRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum AdapterError {
    #[error("Site error: {0}")]
    SiteError(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Retries exhausted: {0}")]
    RetriesExhausted(String),
    #[error("Timeout")]
    Timeout,
}

/// One pluggable travel-site integration. Both operations fail
/// independently; a failure is returned as a value and isolated at the
/// aggregator boundary, never raised across it.
///
/// A provider that does not offer a category returns an empty list, not
/// an error. Flight search returns an empty list without any network
/// call when `criteria.origin` is absent.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Search flight offers matching the criteria
    async fn search_flights(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<OfferRecord>, AdapterError>;

    /// Search accommodation offers matching the criteria
    async fn search_accommodations(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<OfferRecord>, AdapterError>;

    /// Release the adapter's HTTP session once a search run is finished
    async fn release(&self);

    /// Get the name of the travel site
    fn name(&self) -> &'static str;
}
