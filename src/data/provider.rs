use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    config::{ApiSettings, DF, QUERY},
    data::{FetchError, MaybeSendSync},
    domain::{CoinInfo, CoinSummary, CoinTicker, HistoryPoint, sort_by_close_time},
    utils::{now_timestamp_secs, window_ending_at},
};

#[cfg(not(target_arch = "wasm32"))]
use {crate::config::PAPRIKA, std::time::Duration};

/// Abstract interface for the remote coin data source.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait CoinApi: MaybeSendSync {
    /// Every listed coin, in API order.
    async fn fetch_coins(&self) -> Result<Vec<CoinSummary>, FetchError>;

    async fn fetch_coin_info(&self, id: &str) -> Result<CoinInfo, FetchError>;

    async fn fetch_ticker(&self, id: &str) -> Result<CoinTicker, FetchError>;

    /// Bounded daily history ending now, ascending by close time.
    async fn fetch_history(&self, id: &str) -> Result<Vec<HistoryPoint>, FetchError>;
}

/// CoinPaprika REST client.
pub struct PaprikaProvider {
    client: Client,
    base_url: String,
}

impl PaprikaProvider {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let builder = Client::builder();

        // Browsers own timeouts and the user agent.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(Duration::from_millis(settings.timeout_ms))
            .user_agent(PAPRIKA.user_agent);

        let client = builder.build()?;
        log::info!("Created CoinPaprika client: base_url='{}'", settings.base_url);
        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        if DF.log_fetches {
            log::info!("GET {} {:?}", url, query);
        }

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        let body = if status.is_success() {
            response.text().await?
        } else {
            response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string())
        };
        if let Some(err) = status_error(status, path, &body) {
            return Err(err);
        }
        decode(&body)
    }
}

/// 404 is a missing coin; any other non-success status is a network failure.
fn status_error(status: StatusCode, path: &str, body: &str) -> Option<FetchError> {
    if status == StatusCode::NOT_FOUND {
        Some(FetchError::NotFound(path.to_string()))
    } else if !status.is_success() {
        Some(FetchError::Network(format!(
            "HTTP {} from {}: {}",
            status, path, body
        )))
    } else {
        None
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl CoinApi for PaprikaProvider {
    async fn fetch_coins(&self) -> Result<Vec<CoinSummary>, FetchError> {
        self.get_json("/coins", &[]).await
    }

    async fn fetch_coin_info(&self, id: &str) -> Result<CoinInfo, FetchError> {
        self.get_json(&format!("/coins/{}", id), &[]).await
    }

    async fn fetch_ticker(&self, id: &str) -> Result<CoinTicker, FetchError> {
        self.get_json(&format!("/tickers/{}", id), &[]).await
    }

    async fn fetch_history(&self, id: &str) -> Result<Vec<HistoryPoint>, FetchError> {
        let (start, end) = window_ending_at(now_timestamp_secs(), QUERY.history_window_days);
        let mut points: Vec<HistoryPoint> = self
            .get_json(
                &format!("/coins/{}/ohlcv/historical", id),
                &[("start", start.to_string()), ("end", end.to_string())],
            )
            .await?;
        sort_by_close_time(&mut points);
        Ok(points)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    Ok(serde_json::from_str(body)?)
}
