//! Timestamp helpers
//!
//! Timestamps are persisted as integer microseconds since the Unix epoch.
//! Values produced here are truncated to that precision so a record read back
//! from storage compares equal to the one that was written.

use chrono::{DateTime, Utc};

/// Current time at storage precision
pub fn now() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_micros(now.timestamp_micros()).unwrap_or(now)
}

/// Encode a timestamp for storage
pub fn to_micros(at: DateTime<Utc>) -> i64 {
    at.timestamp_micros()
}

/// Decode a stored timestamp, `None` if out of range
pub fn from_micros(micros: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_micros(micros)
}
