use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One OHLCV sample from `GET /coins/{id}/ohlcv/historical`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryPoint {
    pub time_open: DateTime<Utc>,
    pub time_close: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
    #[serde(default)]
    pub market_cap: f64,
}

/// Sort ascending by close time. The chart relies on this ordering.
pub fn sort_by_close_time(points: &mut [HistoryPoint]) {
    points.sort_by_key(|p| p.time_close);
}

/// `[close_time_secs, close_price]` pairs ready for plotting.
pub fn close_series(points: &[HistoryPoint]) -> Vec<[f64; 2]> {
    points
        .iter()
        .map(|p| [p.time_close.timestamp() as f64, p.close])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(close_secs: i64, close: f64) -> HistoryPoint {
        let t = DateTime::from_timestamp(close_secs, 0).unwrap();
        HistoryPoint {
            time_open: t,
            time_close: t,
            open: close,
            high: close,
            low: close,
            close,
            volume: 0.0,
            market_cap: 0.0,
        }
    }

    #[test]
    fn decodes_paprika_history_row() {
        let json = r#"[{"time_open":"2024-01-01T00:00:00Z","time_close":"2024-01-01T23:59:59Z",
            "open":42000,"high":42900,"low":41800,"close":42500.25,"volume":12000000000,
            "market_cap":830000000000}]"#;
        let points: Vec<HistoryPoint> = serde_json::from_str(json).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].close, 42500.25);
        assert_eq!(points[0].time_close.timestamp(), 1_704_153_599);
    }

    #[test]
    fn series_uses_close_time_and_close_price_in_time_order() {
        let mut points = vec![point(300, 3.0), point(100, 1.0), point(200, 2.0)];
        sort_by_close_time(&mut points);
        assert_eq!(
            close_series(&points),
            vec![[100.0, 1.0], [200.0, 2.0], [300.0, 3.0]]
        );
    }
}
