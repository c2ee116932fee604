//! Time utilities: the log's timestamp format and minute arithmetic.

use chrono::{Local, NaiveDateTime};

/// Timestamp encoding used in the record log (minute precision, local time)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Local date-time of right now.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
}

pub fn format_timestamp(t: &NaiveDateTime) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_minutes()
}
