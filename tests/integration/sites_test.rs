// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;
use travelrs::domain::models::offer::OfferCategory;
use travelrs::domain::search::adapter::{AdapterError, SourceAdapter};
use travelrs::engines::fetcher::{FetcherConfig, PageFetcher};
use travelrs::infrastructure::sites::booking::BookingAdapter;
use travelrs::infrastructure::sites::kayak::KayakAdapter;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::criteria;

fn fetcher() -> Arc<PageFetcher> {
    Arc::new(PageFetcher::new(FetcherConfig {
        request_timeout: Duration::from_secs(5),
        max_retries: 1,
        initial_backoff: Duration::from_millis(10),
        max_backoff: Duration::from_millis(50),
        max_concurrent_requests: 4,
        user_agents: vec!["travelrs-integration-test".to_string()],
    }))
}

const BOOKING_RESULTS: &str = r#"
<html><body>
  <div data-testid="property-card">
    <a href="/hotel/ar/llao-llao.html"><h3 data-testid="title">Llao Llao Resort</h3></a>
    <span data-testid="price-and-discounted-price">$1,480</span>
    <div data-testid="rating-score">9.1</div>
    <img src="https://cf.bstatic.com/llao.jpg"/>
  </div>
  <div data-testid="property-card">
    <a href="/hotel/ar/centro.html"><h3 data-testid="title">Hotel Centro</h3></a>
    <span data-testid="price-and-discounted-price">$240</span>
  </div>
</body></html>
"#;

#[tokio::test]
async fn test_booking_adapter_normalizes_listing_markup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/searchresults.html"))
        .and(query_param("ss", "Bariloche"))
        .and(query_param("group_adults", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BOOKING_RESULTS))
        .mount(&server)
        .await;

    let adapter = BookingAdapter::with_base_url(fetcher(), server.uri());
    let offers = adapter.search_accommodations(&criteria()).await.unwrap();

    assert_eq!(offers.len(), 2);
    assert_eq!(offers[0].site, "Booking.com");
    assert_eq!(offers[0].category, OfferCategory::Accommodation);
    assert_eq!(offers[0].title, "Llao Llao Resort");
    assert_eq!(offers[0].price, 1480.0);
    assert_eq!(offers[0].rating, Some(9.1));
    assert!(offers[0].link.ends_with("/hotel/ar/llao-llao.html"));
    assert_eq!(offers[1].rating, None);

    adapter.release().await;
}

#[tokio::test]
async fn test_booking_adapter_has_no_flight_category() {
    let server = MockServer::start().await;
    let adapter = BookingAdapter::with_base_url(fetcher(), server.uri());

    let offers = adapter.search_flights(&criteria()).await.unwrap();

    // Empty list, not an error, and no network traffic at all
    assert!(offers.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_flight_search_without_origin_skips_the_network() {
    let server = MockServer::start().await;
    let adapter = KayakAdapter::with_base_url(fetcher(), server.uri());

    let mut no_origin = criteria();
    no_origin.origin = None;

    let offers = adapter.search_flights(&no_origin).await.unwrap();

    assert!(offers.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_persistent_server_errors_surface_as_adapter_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let adapter = KayakAdapter::with_base_url(fetcher(), server.uri());
    let err = adapter.search_accommodations(&criteria()).await.unwrap_err();

    assert!(matches!(err, AdapterError::RetriesExhausted(_)));
    // initial attempt + 1 retry with max_retries = 1
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_kayak_flight_markup_round_trip() {
    let server = MockServer::start().await;
    let flights_html = r#"
    <html><body>
      <div class="FlightResultCard-item">
        <span class="AirlineName-label">Aerolineas Argentinas</span>
        <span class="Price-text">$ 320</span>
        <span class="Duration-text">2h 05m</span>
        <span class="Stops-text">Direct</span>
        <a href="/flights/book/1">Book</a>
      </div>
    </body></html>
    "#;
    Mock::given(method("GET"))
        .and(path("/flights"))
        .and(query_param("origin", "Buenos Aires"))
        .and(query_param("destination", "Bariloche"))
        .respond_with(ResponseTemplate::new(200).set_body_string(flights_html))
        .mount(&server)
        .await;

    let adapter = KayakAdapter::with_base_url(fetcher(), server.uri());
    let offers = adapter.search_flights(&criteria()).await.unwrap();

    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].category, OfferCategory::Flight);
    assert_eq!(offers[0].title, "Aerolineas Argentinas - Direct");
    assert_eq!(offers[0].description, "Duration: 2h 05m, Stops: Direct");
}
