//! Post timestamp formatting.

use chrono::{DateTime, Utc};

use crate::domain::NANOS_PER_MILLI;

/// Rendered in place of a date that cannot be represented.
pub const INVALID_DATE: &str = "Invalid Date";

/// Long `en-US` form: full month name, day, year (`January 5, 2024`).
const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Format a nanosecond timestamp as a long calendar date (UTC).
pub fn format_timestamp(nanos: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(nanos / NANOS_PER_MILLI) {
        Some(instant) => instant.format(LONG_DATE_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}
