// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration.
///
/// Loaded from optional config files and `AUCRS__`-prefixed environment
/// variables, with code-level defaults for every field.
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub auction: AuctionSettings,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Settings for the upstream closed-auction search.
#[derive(Debug, Clone, Deserialize)]
pub struct AuctionSettings {
    /// Marketplace origin, overridable so tests can point at a local mock.
    pub base_url: String,
    /// Fixed result count per page.
    pub page_size: u32,
    /// Default page limit for the interactive search endpoint.
    pub max_pages: u32,
    /// Delay between successive page requests within one query.
    pub page_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("auction.base_url", "https://auctions.yahoo.co.jp")?
            .set_default("auction.page_size", 100)?
            .set_default("auction.max_pages", 3)?
            .set_default("auction.page_delay_ms", 1000)?
            .set_default("auction.request_timeout_secs", 30)?
            .set_default(
                "auction.user_agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
            )?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("AUCRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_without_any_files() {
        let settings = Settings::new().expect("default settings should load");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.auction.page_size, 100);
        assert_eq!(settings.auction.max_pages, 3);
        assert_eq!(settings.auction.page_delay_ms, 1000);
        assert!(settings.auction.base_url.starts_with("https://"));
    }
}
