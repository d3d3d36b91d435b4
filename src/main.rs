// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use aucrs::config::settings::Settings;
use aucrs::domain::services::query_service::QueryService;
use aucrs::infrastructure::auction::fetcher::YahooAuctionFetcher;
use aucrs::presentation::routes;
use aucrs::utils::clock::SystemClock;
use aucrs::utils::telemetry;
use axum::Extension;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting aucrs...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Initialize the fetch pipeline
    let fetcher = Arc::new(YahooAuctionFetcher::new(
        &settings.auction,
        Arc::new(SystemClock),
    ));
    let service = Arc::new(QueryService::new(
        fetcher,
        Duration::from_millis(settings.auction.page_delay_ms),
    ));

    // 4. Start HTTP server
    let app = routes::routes::<YahooAuctionFetcher>()
        .layer(Extension(service))
        .layer(Extension(settings.clone()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
