// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::auction::source::AuctionSource;
use crate::domain::models::listing::{AuctionListing, BatchResult, QueryResult};
use crate::domain::services::price_stats;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum QueryServiceError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Drives the fetch → parse → aggregate pipeline on top of an
/// [`AuctionSource`].
///
/// Owns the pagination policy: sequential page requests with a fixed delay
/// in between, early termination on an empty page, and degradation to
/// partial results when a page request fails. Both the interactive search
/// endpoint and the batch endpoint go through this service.
pub struct QueryService<S> {
    source: Arc<S>,
    page_delay: Duration,
}

impl<S> QueryService<S>
where
    S: AuctionSource + 'static,
{
    pub fn new(source: Arc<S>, page_delay: Duration) -> Self {
        Self { source, page_delay }
    }

    /// Multi-page search for the interactive endpoint.
    pub async fn search(
        &self,
        query: &str,
        max_pages: u32,
    ) -> Result<QueryResult, QueryServiceError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(QueryServiceError::Validation(
                "query must not be empty".to_string(),
            ));
        }

        let items = self.collect_pages(query, max_pages).await;
        Ok(Self::assemble(query, items))
    }

    /// One single-page pipeline per query, fanned out concurrently.
    ///
    /// A failing query degrades to an empty result with zero statistics and
    /// never aborts the batch. Output order matches input order.
    pub async fn batch_search(&self, queries: Vec<String>) -> BatchResult {
        let pipelines = queries.into_iter().map(|query| async move {
            match self.source.fetch_page(&query, 1).await {
                Ok(items) => Self::assemble(&query, items),
                Err(e) => {
                    warn!(query = %query, error = %e, "batch query failed, returning empty result");
                    QueryResult::empty(query)
                }
            }
        });

        BatchResult {
            queries: join_all(pipelines).await,
        }
    }

    /// Fetch pages 1..=max_pages sequentially, concatenating in page order.
    ///
    /// Stops before the limit when a page comes back empty (no more
    /// results) or when a page request fails; a failure on page `k` keeps
    /// the records accumulated from pages 1..k. Sleeps the configured delay
    /// between successive requests, not after the last.
    async fn collect_pages(&self, query: &str, max_pages: u32) -> Vec<AuctionListing> {
        let mut all_items = Vec::new();

        for page in 1..=max_pages {
            match self.source.fetch_page(query, page).await {
                Ok(items) => {
                    if items.is_empty() {
                        break;
                    }
                    all_items.extend(items);
                }
                Err(e) => {
                    warn!(query, page, error = %e, "page fetch failed, keeping partial results");
                    break;
                }
            }

            if page < max_pages {
                tokio::time::sleep(self.page_delay).await;
            }
        }

        all_items
    }

    fn assemble(query: &str, items: Vec<AuctionListing>) -> QueryResult {
        let prices: Vec<u64> = items.iter().map(|item| item.price).collect();
        QueryResult {
            query: query.to_string(),
            stats: price_stats::calculate_stats(&prices),
            items,
        }
    }
}
