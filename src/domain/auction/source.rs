// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::listing::AuctionListing;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum FetchError {
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
}

/// A source of paginated closed-auction search results.
///
/// The production implementation talks to the marketplace over HTTP; tests
/// substitute scripted sources to exercise pagination and failure handling.
#[async_trait]
pub trait AuctionSource: Send + Sync {
    /// Fetch one page (1-based) of results for a query.
    ///
    /// An empty vector means the marketplace has no further results; it is
    /// not an error.
    async fn fetch_page(&self, query: &str, page: u32)
        -> Result<Vec<AuctionListing>, FetchError>;
}
