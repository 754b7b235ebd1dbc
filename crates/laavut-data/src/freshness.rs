//! When a cached snapshot should be fetched again.

use chrono::{DateTime, Utc};

/// A snapshot this many whole days old is due for a refresh.
pub const REFRESH_AFTER_DAYS: i64 = 1;

/// Whole days elapsed from `then` to `now`. Negative when `then` is in the future.
#[must_use]
pub fn days_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - then).num_days()
}

/// True when nothing was ever saved or the save is at least a day old.
#[must_use]
pub fn needs_refresh(saved_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    saved_at.is_none_or(|saved_at| days_ago(saved_at, now) >= REFRESH_AFTER_DAYS)
}
