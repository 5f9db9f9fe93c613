use chrono::{DateTime, Utc};

/// Monotonic clock that also works in the browser.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const S_IN_MIN: i64 = 60;
    pub const S_IN_H: i64 = Self::S_IN_MIN * 60;
    pub const S_IN_D: i64 = Self::S_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    pub const STANDARD_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
}

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

pub fn now_timestamp_secs() -> i64 {
    now_utc().timestamp()
}

/// Start and end (unix seconds) of a window of `days` ending at `end_secs`.
pub fn window_ending_at(end_secs: i64, days: i64) -> (i64, i64) {
    (end_secs - days * TimeUtils::S_IN_D, end_secs)
}

pub fn epoch_secs_to_date_string(epoch_secs: i64) -> String {
    match DateTime::from_timestamp(epoch_secs, 0) {
        Some(dt) => dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}

pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(TimeUtils::STANDARD_DATETIME_FORMAT).to_string()
}
