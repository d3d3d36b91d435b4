// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use aucrs::config::settings::AuctionSettings;
use aucrs::domain::auction::source::{AuctionSource, FetchError};
use aucrs::domain::services::query_service::QueryService;
use aucrs::infrastructure::auction::fetcher::YahooAuctionFetcher;
use aucrs::utils::clock::Clock;
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{headers, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE_ONE: &str = r#"
    <html><body><ul>
      <li class="Result__item">
        <div class="Product__title"><a href="https://auctions.yahoo.co.jp/item/1">Panasonic CF-LV9RDAVS</a></div>
        <span class="Product__priceValue">80,000円</span>
        <span class="Product__time">5月10日</span>
      </li>
      <li class="Result__item">
        <div class="Product__title"><a href="https://auctions.yahoo.co.jp/item/2">Panasonic CF-LV9 ジャンク</a></div>
        <span class="Product__priceValue">20,000円</span>
        <span class="Product__time">2023年12月31日</span>
      </li>
    </ul></body></html>
"#;

const EMPTY_PAGE: &str = "<html><body><ul></ul></body></html>";

struct FixedClock;

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    }
}

fn fetcher_for(server: &MockServer) -> YahooAuctionFetcher {
    let settings = AuctionSettings {
        base_url: server.uri(),
        page_size: 100,
        max_pages: 3,
        page_delay_ms: 0,
        request_timeout_secs: 5,
        user_agent: "aucrs-test".to_string(),
    };
    YahooAuctionFetcher::new(&settings, Arc::new(FixedClock))
}

#[tokio::test]
async fn fetches_and_extracts_one_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/closed"))
        .and(query_param("p", "CF-LV9RDAVS"))
        .and(query_param("va", "CF-LV9RDAVS"))
        .and(query_param("b", "1"))
        .and(query_param("n", "100"))
        // wiremock splits comma-separated header values, so the single
        // "ja,en-US;q=0.9,en;q=0.8" value must be matched as a list.
        .and(headers("accept-language", vec!["ja", "en-US;q=0.9", "en;q=0.8"]))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE_ONE))
        .mount(&server)
        .await;

    let items = fetcher_for(&server)
        .fetch_page("CF-LV9RDAVS", 1)
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Panasonic CF-LV9RDAVS");
    assert_eq!(items[0].price, 80000);
    assert_eq!(items[0].date, "2024-05-10");
    assert_eq!(items[1].price, 20000);
    assert_eq!(items[1].date, "2023-12-31");
}

#[tokio::test]
async fn non_success_status_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/closed"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = fetcher_for(&server)
        .fetch_page("camera", 1)
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Status(503)));
}

#[tokio::test]
async fn pipeline_stops_on_empty_page_and_computes_stats() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/closed"))
        .and(query_param("b", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE_ONE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search/closed"))
        .and(query_param("b", "101"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let service = QueryService::new(Arc::new(fetcher_for(&server)), Duration::ZERO);
    let result = service.search("CF-LV9RDAVS", 3).await.unwrap();

    assert_eq!(result.query, "CF-LV9RDAVS");
    assert_eq!(result.items.len(), 2);
    assert_eq!(result.stats.count, 2);
    assert_eq!(result.stats.average, 50000);
    assert_eq!(result.stats.median, 50000);
    assert_eq!(result.stats.min, 20000);
    assert_eq!(result.stats.max, 80000);

    // Two page requests in total: the empty second page ends pagination
    // before the configured limit.
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}
