// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::listing::AuctionListing;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

// Close dates come localized as `M月D日` or `Y年M月D日`.
static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)年").expect("Failed to compile year regex"));
static MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)月").expect("Failed to compile month regex"));
static DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)日").expect("Failed to compile day regex"));

/// Extracts [`AuctionListing`] records from one page of closed-auction
/// search results.
///
/// Extraction is tolerant per item: a listing node with an empty title or an
/// unparseable price is dropped and the rest of the page is still processed.
/// Selectors are pre-parsed once at construction.
pub struct ListingExtractor {
    item_selector: Selector,
    title_selector: Selector,
    price_selector: Selector,
    time_selector: Selector,
}

impl Default for ListingExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingExtractor {
    pub fn new() -> Self {
        Self {
            item_selector: Selector::parse(".Result__item")
                .expect("Failed to parse result item selector"),
            title_selector: Selector::parse(".Product__title a")
                .expect("Failed to parse title selector"),
            price_selector: Selector::parse(".Product__priceValue")
                .expect("Failed to parse price selector"),
            time_selector: Selector::parse(".Product__time")
                .expect("Failed to parse close time selector"),
        }
    }

    /// Parse one page of HTML into listings, in document order.
    ///
    /// `today` anchors the year default and the fallback date during close
    /// date normalization.
    pub fn extract(&self, html: &str, today: NaiveDate) -> Vec<AuctionListing> {
        let document = Html::parse_document(html);
        let mut items = Vec::new();
        let mut dropped = 0usize;

        for element in document.select(&self.item_selector) {
            match self.extract_item(element, today) {
                Some(item) => items.push(item),
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            debug!(dropped, "dropped listings with missing title or price");
        }

        items
    }

    fn extract_item(&self, element: ElementRef<'_>, today: NaiveDate) -> Option<AuctionListing> {
        let anchor = element.select(&self.title_selector).next()?;
        let title = anchor.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            return None;
        }
        let url = anchor.value().attr("href").unwrap_or_default().to_string();

        let price_text = element
            .select(&self.price_selector)
            .next()?
            .text()
            .collect::<String>();
        let digits: String = price_text.chars().filter(char::is_ascii_digit).collect();
        let price = digits.parse::<u64>().ok()?;

        let date_text = element
            .select(&self.time_selector)
            .next()
            .map(|node| node.text().collect::<String>())
            .unwrap_or_default();
        let date = normalize_close_date(date_text.trim(), today);

        Some(AuctionListing::new(title, price, date, url))
    }
}

/// Normalize a localized close date to `YYYY-MM-DD`.
///
/// Accepts `M月D日` (year defaults to today's) and `Y年M月D日`. This is a
/// total function: any text that does not yield both a month and a day maps
/// to today's date.
pub fn normalize_close_date(text: &str, today: NaiveDate) -> String {
    let mut year = today.year();
    let mut month_day = text;

    if text.contains('年') {
        if let Some(caps) = YEAR_RE.captures(text) {
            if let Ok(y) = caps[1].parse::<i32>() {
                year = y;
                month_day = text.split('年').nth(1).unwrap_or("");
            }
        }
    }

    let month = MONTH_RE
        .captures(month_day)
        .and_then(|caps| caps[1].parse::<u32>().ok());
    let day = DAY_RE
        .captures(month_day)
        .and_then(|caps| caps[1].parse::<u32>().ok());

    match (month, day) {
        (Some(month), Some(day)) => format!("{year:04}-{month:02}-{day:02}"),
        _ => today.format("%Y-%m-%d").to_string(),
    }
}
