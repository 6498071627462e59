//! Unix timestamp rendering.

use chrono::{DateTime, Utc};

/// Renders a Unix timestamp (seconds) as a UTC datetime string with
/// millisecond precision: `2021-05-03 00:00:00.000`.
///
/// Timestamps outside chrono's representable range fall back to the Unix
/// epoch rather than failing.
pub fn format_unix_time(epoch_seconds: i64) -> String {
    let datetime = DateTime::<Utc>::from_timestamp(epoch_seconds, 0)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
    datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}
