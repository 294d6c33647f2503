// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    routing::{get, post},
    Extension, Router,
};
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;
use travelrs::domain::models::offer::OfferCategory;
use travelrs::domain::search::adapter::SourceAdapter;
use travelrs::domain::services::search_service::SearchService;
use travelrs::infrastructure::repositories::memory_search_repo::InMemorySearchRepository;
use travelrs::infrastructure::sites::aggregator::OfferAggregator;
use travelrs::presentation::handlers::{self, search_handler};

use crate::helpers::{offer, StubAdapter};

fn test_app(adapters: Vec<Arc<dyn SourceAdapter>>) -> (TestServer, Arc<InMemorySearchRepository>) {
    let repository = Arc::new(InMemorySearchRepository::new());
    let service = Arc::new(SearchService::new(
        OfferAggregator::new(adapters),
        repository.clone(),
    ));

    let app = Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/v1/search",
            post(search_handler::search::<InMemorySearchRepository>),
        )
        .layer(Extension(service));

    (TestServer::new(app).expect("test server should start"), repository)
}

fn request_body() -> Value {
    json!({
        "destination": "Bariloche",
        "start_date": "2025-03-01T00:00:00Z",
        "end_date": "2025-03-08T00:00:00Z",
        "guests": 2,
        "budget": 1500.0,
        "origin": "Buenos Aires"
    })
}

#[tokio::test]
async fn test_search_route_returns_the_full_response_shape() {
    let kayak = StubAdapter::returning(
        "Kayak",
        vec![
            offer("Kayak", OfferCategory::Flight, 320.0, "AR - Direct"),
            offer("Kayak", OfferCategory::Flight, 550.0, "LA - 1 stop"),
        ],
        vec![offer("Kayak", OfferCategory::Accommodation, 95.0, "Hotel Centro")],
    );
    let (server, repository) = test_app(vec![kayak as Arc<dyn SourceAdapter>]);

    let response = server.post("/v1/search").json(&request_body()).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["total_found"], 3);
    assert_eq!(body["all_flights"].as_array().unwrap().len(), 2);
    assert_eq!(body["all_accommodations"].as_array().unwrap().len(), 1);
    assert_eq!(body["best_flight"]["title"], "AR - Direct");
    assert_eq!(body["best_accommodation"]["title"], "Hotel Centro");
    assert!(body["persistence_error"].is_null());
    assert!(body.get("id").is_some());
    assert!(body.get("created_at").is_some());

    // The offers were handed off to the store under the returned id
    let id = body["id"].as_str().unwrap().parse().unwrap();
    assert_eq!(repository.results_for(id).unwrap().len(), 3);
}

#[tokio::test]
async fn test_search_route_rejects_inverted_dates() {
    let adapter = StubAdapter::returning("Kayak", vec![], vec![]);
    let (server, _) = test_app(vec![adapter.clone() as Arc<dyn SourceAdapter>]);

    let mut body = request_body();
    body["end_date"] = json!("2025-02-01T00:00:00Z");

    let response = server.post("/v1/search").json(&body).await;
    response.assert_status_bad_request();
    assert_eq!(adapter.call_count(), 0);
}

#[tokio::test]
async fn test_search_route_rejects_zero_guests() {
    let (server, _) = test_app(vec![]);

    let mut body = request_body();
    body["guests"] = json!(0);

    let response = server.post("/v1/search").json(&body).await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_search_with_no_sites_is_a_valid_empty_result() {
    let (server, _) = test_app(vec![]);

    let response = server.post("/v1/search").json(&request_body()).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["total_found"], 0);
    assert!(body["best_flight"].is_null());
    assert!(body["best_accommodation"].is_null());
    assert_eq!(body["all_flights"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_health_route() {
    let (server, _) = test_app(vec![]);
    let response = server.get("/health").await;
    response.assert_status_ok();
}
