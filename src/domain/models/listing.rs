// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// One completed-auction listing extracted from a result page.
///
/// Constructed only when the title is non-empty and the price parsed as a
/// non-negative integer; the close date always carries a value because date
/// normalization falls back to the current date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuctionListing {
    pub title: String,
    /// Final price in yen.
    pub price: u64,
    /// Close date as `YYYY-MM-DD`.
    pub date: String,
    pub url: String,
}

impl AuctionListing {
    pub fn new(title: String, price: u64, date: String, url: String) -> Self {
        Self {
            title,
            price,
            date,
            url,
        }
    }
}

/// Summary statistics over the price column of a result set.
///
/// All yen amounts are rounded to the nearest integer. `count` reflects the
/// population the statistics were computed over, which is the trimmed set
/// when outlier exclusion applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PriceStats {
    pub average: u64,
    pub median: u64,
    pub min: u64,
    pub max: u64,
    pub count: usize,
}

/// The result of one search query: the extracted listings in page order
/// (newest first within a page) and the statistics over their prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryResult {
    pub query: String,
    pub items: Vec<AuctionListing>,
    pub stats: PriceStats,
}

impl QueryResult {
    /// Degraded result for a query whose fetch failed: no items, zero stats.
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            items: Vec::new(),
            stats: PriceStats::default(),
        }
    }
}

/// Batch-mode output, one [`QueryResult`] per input query in input order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchResult {
    pub queries: Vec<QueryResult>,
}
