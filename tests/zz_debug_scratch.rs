use aucrs::config::settings::AuctionSettings;
use aucrs::domain::auction::source::AuctionSource;
use aucrs::infrastructure::auction::fetcher::YahooAuctionFetcher;
use aucrs::utils::clock::Clock;
use chrono::NaiveDate;
use std::sync::Arc;
use wiremock::{Mock, MockServer, ResponseTemplate};
use wiremock::matchers::{header, method, path, query_param};

struct FixedClock;
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate { NaiveDate::from_ymd_opt(2024, 5, 15).unwrap() }
}

async fn try_one(name: &str, m: impl wiremock::Match + Send + Sync + 'static) {
    let server = MockServer::start().await;
    Mock::given(m)
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;
    let settings = AuctionSettings {
        base_url: server.uri(),
        page_size: 100,
        max_pages: 3,
        page_delay_ms: 0,
        request_timeout_secs: 5,
        user_agent: "aucrs-test".to_string(),
    };
    let f = YahooAuctionFetcher::new(&settings, Arc::new(FixedClock));
    let r = f.fetch_page("CF-LV9RDAVS", 1).await;
    println!("{name}: {:?}", r.as_ref().map(|v| v.len()).map_err(|e| format!("{e:?}")));
}

#[tokio::test]
async fn debug_matchers() {
    try_one("method", method("GET")).await;
    try_one("path", path("/search/closed")).await;
    try_one("qp_p", query_param("p", "CF-LV9RDAVS")).await;
    try_one("qp_va", query_param("va", "CF-LV9RDAVS")).await;
    try_one("qp_b", query_param("b", "1")).await;
    try_one("qp_n", query_param("n", "100")).await;
    try_one("hdr", header("accept-language", "ja,en-US;q=0.9,en;q=0.8")).await;
}
