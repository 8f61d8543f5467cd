//! Bulletin dates

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Local calendar date of an ISO-8601 timestamp
///
/// Accepts offset-carrying timestamps (the date is taken in that offset),
/// naive date-times with `T` or a space, and bare dates.
pub fn local_date(timestamp: &str) -> Option<NaiveDate> {
    let timestamp = timestamp.trim();

    if let Ok(dt) = timestamp.parse::<DateTime<FixedOffset>>() {
        return Some(dt.naive_local().date());
    }
    if let Ok(dt) = timestamp.parse::<NaiveDateTime>() {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(timestamp, "%Y-%m-%d").ok()
}
