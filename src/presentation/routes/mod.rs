// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::auction::source::AuctionSource;
use crate::presentation::handlers::{batch_handler, search_handler};
use axum::{
    routing::{get, post},
    Router,
};

/// Build the application router.
///
/// The query service and settings are expected as Extension layers; the
/// handlers stay generic over the auction source so tests can wire in a
/// scripted one.
pub fn routes<S>() -> Router
where
    S: AuctionSource + 'static,
{
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let api_routes = Router::new()
        .route("/v1/search", get(search_handler::search::<S>))
        .route("/v1/batch", post(batch_handler::batch::<S>));

    Router::new().merge(public_routes).merge(api_routes)
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
