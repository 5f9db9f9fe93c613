mod time_utils;

pub use time_utils::{
    AppInstant, TimeUtils, epoch_secs_to_date_string, format_date, format_datetime,
    now_timestamp_secs, now_utc, window_ending_at,
};
