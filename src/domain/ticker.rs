use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Live market metrics for one coin, as returned by `GET /tickers/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CoinTicker {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    pub circulating_supply: f64,
    pub total_supply: f64,
    pub max_supply: f64,
    pub beta_value: f64,
    pub first_data_at: Option<DateTime<Utc>>,
    pub last_updated: Option<DateTime<Utc>>,
    pub quotes: Quotes,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Quotes {
    #[serde(rename = "USD")]
    pub usd: Quote,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Quote {
    pub price: f64,
    pub volume_24h: f64,
    pub volume_24h_change_24h: f64,
    pub market_cap: f64,
    pub market_cap_change_24h: f64,
    pub percent_change_15m: f64,
    pub percent_change_30m: f64,
    pub percent_change_1h: f64,
    pub percent_change_6h: f64,
    pub percent_change_12h: f64,
    pub percent_change_24h: f64,
    pub percent_change_7d: f64,
    pub percent_change_30d: f64,
    pub percent_change_1y: f64,
    pub ath_price: Option<f64>,
    pub ath_date: Option<DateTime<Utc>>,
    pub percent_from_price_ath: Option<f64>,
}

impl CoinTicker {
    pub fn quote(&self) -> &Quote {
        &self.quotes.usd
    }

    /// Paprika reports an uncapped supply as zero.
    pub fn has_max_supply(&self) -> bool {
        self.max_supply > 0.0
    }
}

impl Quote {
    /// Percent change per window, shortest window first.
    pub fn changes(&self) -> [(&'static str, f64); 9] {
        [
            ("15m", self.percent_change_15m),
            ("30m", self.percent_change_30m),
            ("1h", self.percent_change_1h),
            ("6h", self.percent_change_6h),
            ("12h", self.percent_change_12h),
            ("24h", self.percent_change_24h),
            ("7d", self.percent_change_7d),
            ("30d", self.percent_change_30d),
            ("1y", self.percent_change_1y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICKER_JSON: &str = r#"{
        "id":"btc-bitcoin","name":"Bitcoin","symbol":"BTC","rank":1,
        "circulating_supply":19500000,"total_supply":19500000,"max_supply":21000000,
        "beta_value":1.02,"first_data_at":"2010-07-17T00:00:00Z",
        "last_updated":"2024-01-01T12:00:00Z",
        "quotes":{"USD":{"price":42000.5,"volume_24h":1.5e10,"volume_24h_change_24h":-3.2,
            "market_cap":8.2e11,"market_cap_change_24h":1.1,
            "percent_change_15m":0.1,"percent_change_30m":0.2,"percent_change_1h":0.3,
            "percent_change_6h":0.4,"percent_change_12h":0.5,"percent_change_24h":0.6,
            "percent_change_7d":0.7,"percent_change_30d":0.8,"percent_change_1y":0.9,
            "ath_price":69000,"ath_date":"2021-11-10T16:51:15Z","percent_from_price_ath":-39.1}}
    }"#;

    #[test]
    fn ticker_decodes_usd_quote() {
        let ticker: CoinTicker = serde_json::from_str(TICKER_JSON).unwrap();
        assert_eq!(ticker.quote().price, 42000.5);
        assert_eq!(ticker.quote().ath_price, Some(69000.0));
        assert!(ticker.has_max_supply());
    }

    #[test]
    fn change_windows_are_ordered_shortest_first() {
        let ticker: CoinTicker = serde_json::from_str(TICKER_JSON).unwrap();
        let labels: Vec<_> = ticker.quote().changes().iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            ["15m", "30m", "1h", "6h", "12h", "24h", "7d", "30d", "1y"]
        );
        assert_eq!(ticker.quote().changes()[8].1, 0.9);
    }

    #[test]
    fn null_ath_fields_decode_as_none() {
        let json = r#"{"id":"x","quotes":{"USD":{"price":1.0,"ath_price":null,"ath_date":null}}}"#;
        let ticker: CoinTicker = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.quote().ath_date, None);
        assert!(!ticker.has_max_supply());
    }
}
