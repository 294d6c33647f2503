// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use travelrs::domain::models::criteria::SearchCriteria;
use travelrs::domain::models::offer::{OfferCategory, OfferRecord};
use travelrs::domain::search::adapter::{AdapterError, SourceAdapter};

pub fn criteria() -> SearchCriteria {
    SearchCriteria {
        destination: "Bariloche".to_string(),
        start_date: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2025, 3, 8, 0, 0, 0).unwrap(),
        guests: 2,
        budget: 1500.0,
        origin: Some("Buenos Aires".to_string()),
    }
}

pub fn offer(site: &str, category: OfferCategory, price: f64, title: &str) -> OfferRecord {
    OfferRecord::new(site, category, price, title, format!("https://{}/offer", site))
}

/// Scripted adapter for wiring tests: fixed results or a scripted
/// failure, with call and release accounting.
pub struct StubAdapter {
    name: &'static str,
    flights: Result<Vec<OfferRecord>, AdapterError>,
    accommodations: Result<Vec<OfferRecord>, AdapterError>,
    calls: AtomicUsize,
    released: AtomicBool,
}

impl StubAdapter {
    pub fn returning(
        name: &'static str,
        flights: Vec<OfferRecord>,
        accommodations: Vec<OfferRecord>,
    ) -> Arc<Self> {
        Arc::new(Self {
            name,
            flights: Ok(flights),
            accommodations: Ok(accommodations),
            calls: AtomicUsize::new(0),
            released: AtomicBool::new(false),
        })
    }

    pub fn failing(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            flights: Err(AdapterError::NetworkError("connection reset".to_string())),
            accommodations: Err(AdapterError::Timeout),
            calls: AtomicUsize::new(0),
            released: AtomicBool::new(false),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn was_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SourceAdapter for StubAdapter {
    async fn search_flights(
        &self,
        _criteria: &SearchCriteria,
    ) -> Result<Vec<OfferRecord>, AdapterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.flights.clone()
    }

    async fn search_accommodations(
        &self,
        _criteria: &SearchCriteria,
    ) -> Result<Vec<OfferRecord>, AdapterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.accommodations.clone()
    }

    async fn release(&self) {
        self.released.store(true, Ordering::SeqCst);
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
