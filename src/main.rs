// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use travelrs::config::settings::Settings;
use travelrs::domain::services::search_service::SearchService;
use travelrs::engines::fetcher::{FetcherConfig, PageFetcher};
use travelrs::infrastructure::repositories::memory_search_repo::InMemorySearchRepository;
use travelrs::infrastructure::sites::aggregator::OfferAggregator;
use travelrs::infrastructure::sites::factory;
use travelrs::presentation::handlers::{self, search_handler};
use travelrs::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting travelrs...");

    // Initialize Prometheus Metrics
    travelrs::infrastructure::metrics::init_metrics();

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Build the shared fetcher
    let fetcher = Arc::new(PageFetcher::new(FetcherConfig {
        request_timeout: Duration::from_secs(settings.fetcher.request_timeout_secs),
        max_retries: settings.fetcher.max_retries,
        initial_backoff: Duration::from_millis(settings.fetcher.initial_backoff_ms),
        max_backoff: Duration::from_secs(settings.fetcher.max_backoff_secs),
        max_concurrent_requests: settings.fetcher.max_concurrent_requests,
        user_agents: settings.fetcher.user_agents.clone().unwrap_or_default(),
    }));

    // 4. Register site adapters and assemble the search service
    let adapters = factory::build_adapters(&settings.sites.enabled, &fetcher);
    info!("{} site adapters registered", adapters.len());

    let aggregator = OfferAggregator::new(adapters);
    let repository = Arc::new(InMemorySearchRepository::new());
    let service = Arc::new(SearchService::new(aggregator, repository));

    // 5. Build the router and serve
    let app = Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/v1/search",
            post(search_handler::search::<InMemorySearchRepository>),
        )
        .layer(TraceLayer::new_for_http())
        .layer(Extension(service));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
