use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Nanoseconds in one millisecond.
pub const NANOS_PER_MILLI: i64 = 1_000_000;

/// Post entity - a blog entry owned by the external store.
///
/// The client only ever reads these; `timestamp` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub author: String,
    pub body: String,
    /// Nanoseconds since the Unix epoch.
    pub timestamp: i64,
}

impl Post {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        body: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            body: body.into(),
            timestamp,
        }
    }

    /// Creation instant at millisecond precision, `None` if out of range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp / NANOS_PER_MILLI)
    }
}
