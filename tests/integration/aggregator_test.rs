// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{criteria, offer, StubAdapter};
use std::sync::Arc;
use travelrs::domain::models::offer::OfferCategory;
use travelrs::domain::search::adapter::SourceAdapter;
use travelrs::infrastructure::sites::aggregator::OfferAggregator;

#[tokio::test]
async fn test_merges_both_categories_across_adapters() {
    let kayak = StubAdapter::returning(
        "Kayak",
        vec![offer("Kayak", OfferCategory::Flight, 320.0, "AR - Direct")],
        vec![offer("Kayak", OfferCategory::Accommodation, 95.0, "Hotel Centro")],
    );
    let booking = StubAdapter::returning(
        "Booking.com",
        vec![],
        vec![offer("Booking.com", OfferCategory::Accommodation, 120.0, "Hotel Plaza")],
    );

    let aggregator = OfferAggregator::new(vec![
        kayak.clone() as Arc<dyn SourceAdapter>,
        booking.clone() as Arc<dyn SourceAdapter>,
    ]);
    let offers = aggregator.run(&criteria()).await;

    assert_eq!(offers.len(), 3);
    // Both operations of both adapters ran
    assert_eq!(kayak.call_count(), 2);
    assert_eq!(booking.call_count(), 2);
}

#[tokio::test]
async fn test_failing_adapter_contributes_nothing_and_aborts_nobody() {
    let healthy = StubAdapter::returning(
        "Expedia",
        vec![offer("Expedia", OfferCategory::Flight, 410.0, "LA - 1 stop")],
        vec![offer("Expedia", OfferCategory::Accommodation, 75.0, "Posada Sur")],
    );
    let broken = StubAdapter::failing("Despegar");

    let aggregator = OfferAggregator::new(vec![
        healthy.clone() as Arc<dyn SourceAdapter>,
        broken.clone() as Arc<dyn SourceAdapter>,
    ]);
    let offers = aggregator.run(&criteria()).await;

    // Only the healthy adapter's records survive; the run completed even
    // though both of the broken adapter's operations failed.
    assert_eq!(offers.len(), 2);
    assert!(offers.iter().all(|o| o.site == "Expedia"));
    assert_eq!(broken.call_count(), 2);
}

#[tokio::test]
async fn test_sessions_released_after_the_join_even_on_failure() {
    let healthy = StubAdapter::returning("Kayak", vec![], vec![]);
    let broken = StubAdapter::failing("Airbnb");

    let aggregator = OfferAggregator::new(vec![
        healthy.clone() as Arc<dyn SourceAdapter>,
        broken.clone() as Arc<dyn SourceAdapter>,
    ]);
    aggregator.run(&criteria()).await;

    assert!(healthy.was_released());
    assert!(broken.was_released());
}

#[tokio::test]
async fn test_no_adapters_is_an_empty_merge() {
    let aggregator = OfferAggregator::new(vec![]);
    let offers = aggregator.run(&criteria()).await;
    assert!(offers.is_empty());
}
