use anyhow::{Result, bail};

use crate::Cli;

/// Remote endpoints and HTTP client defaults.
pub struct PaprikaConfig {
    pub base_url: &'static str,
    pub icon_base_url: &'static str,
    pub timeout_ms: u64,
    pub user_agent: &'static str,
}

/// How the views query the API.
pub struct QueryConfig {
    /// Rows shown on the coins list.
    pub coin_list_limit: usize,
    /// Ticker refresh period while a coin page is mounted.
    pub ticker_refresh_ms: u64,
    /// Length of the price history window ending now.
    pub history_window_days: i64,
}

pub const PAPRIKA: PaprikaConfig = PaprikaConfig {
    base_url: "https://api.coinpaprika.com/v1",
    icon_base_url: "https://cryptoicon-api.vercel.app/api/icon",
    timeout_ms: 10_000,
    user_agent: concat!("coin-tracker/", env!("CARGO_PKG_VERSION")),
};

pub const QUERY: QueryConfig = QueryConfig {
    coin_list_limit: 100,
    ticker_refresh_ms: 5000,
    history_window_days: 14,
};

/// Validated runtime settings for the API provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: String,
    pub icon_base_url: String,
    pub timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: PAPRIKA.base_url.to_string(),
            icon_base_url: PAPRIKA.icon_base_url.to_string(),
            timeout_ms: PAPRIKA.timeout_ms,
        }
    }
}

impl ApiSettings {
    pub fn from_cli(args: &Cli) -> Result<Self> {
        let mut settings = Self::default();
        if let Some(url) = &args.api_base_url {
            settings.base_url = normalize_base_url(url)?;
        }
        Ok(settings)
    }

    /// Icon location for a coin symbol. Icons are keyed by lowercase symbol.
    pub fn icon_url(&self, symbol: &str) -> String {
        format!("{}/{}", self.icon_base_url, symbol.to_lowercase())
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let url = raw.trim().trim_end_matches('/');
    if !url.starts_with("http://") && !url.starts_with("https://") {
        bail!(
            "Invalid API base url: must start with http:// or https://, got '{}'",
            raw
        );
    }
    Ok(url.to_string())
}
