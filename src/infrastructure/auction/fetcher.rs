// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::AuctionSettings;
use crate::domain::auction::source::{AuctionSource, FetchError};
use crate::domain::models::listing::AuctionListing;
use crate::infrastructure::auction::extractor::ListingExtractor;
use crate::utils::clock::Clock;
use async_trait::async_trait;
use reqwest::header::ACCEPT_LANGUAGE;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Fetches pages of Yahoo! Auctions closed-auction search results.
///
/// Builds the search URL for a (query, page) pair, issues the GET with a
/// browser-like User-Agent and a Japanese-preferring Accept-Language, and
/// hands the body to [`ListingExtractor`].
pub struct YahooAuctionFetcher {
    client: reqwest::Client,
    base_url: String,
    page_size: u32,
    extractor: ListingExtractor,
    clock: Arc<dyn Clock>,
}

impl YahooAuctionFetcher {
    pub fn new(settings: &AuctionSettings, clock: Arc<dyn Clock>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(&settings.user_agent)
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .pool_max_idle_per_host(10)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            page_size: settings.page_size,
            extractor: ListingExtractor::new(),
            clock,
        }
    }

    /// Build the closed-auction search URL for a 1-based page.
    ///
    /// The query is encoded identically into the primary (`p`) and secondary
    /// (`va`) search parameters; results are restricted to completed
    /// auctions (`exflg=1`) and sorted by close time descending
    /// (`s1=end&o1=d`). The offset parameter is `(page - 1) * page_size + 1`.
    pub fn build_search_url(&self, query: &str, page: u32) -> String {
        let offset = (page - 1) * self.page_size + 1;
        let params = [
            ("p", query.to_string()),
            ("va", query.to_string()),
            ("exflg", "1".to_string()),
            ("b", offset.to_string()),
            ("n", self.page_size.to_string()),
            ("s1", "end".to_string()),
            ("o1", "d".to_string()),
        ];

        format!(
            "{}/search/closed?{}",
            self.base_url,
            serde_urlencoded::to_string(params).unwrap_or_default()
        )
    }
}

#[async_trait]
impl AuctionSource for YahooAuctionFetcher {
    async fn fetch_page(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Vec<AuctionListing>, FetchError> {
        let url = self.build_search_url(query, page);
        debug!(%url, "fetching closed-auction search page");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT_LANGUAGE, "ja,en-US;q=0.9,en;q=0.8")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let items = self.extractor.extract(&html, self.clock.today());
        info!(query, page, count = items.len(), "extracted auction listings");
        Ok(items)
    }
}
