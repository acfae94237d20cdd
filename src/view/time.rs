use chrono::{DateTime, Utc};

pub const UNKNOWN_DATE: &str = "Unknown date";
pub const INVALID_DATE: &str = "Invalid date";
pub const UNKNOWN_LAST_ONLINE: &str = "Unknown";
pub const FUTURE_LAST_ONLINE: &str = "Recently";
pub const ZERO_ELAPSED: &str = "00:00:00";

/// Hours past this are shown as the cap instead.
pub const MAX_ELAPSED_HOURS: i64 = 999;

const LONG_DATE_FORMAT: &str = "%B %-d, %Y";
const MS_PER_MINUTE: i64 = 60 * 1000;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// A positive epoch-second timestamp, or `None` for missing, zero, or negative input.
fn usable(timestamp: Option<i64>) -> Option<i64> {
    timestamp.filter(|ts| *ts > 0)
}

/// Milliseconds from `timestamp` (epoch seconds) to `now`; negative when
/// the timestamp lies in the future.
fn elapsed_ms(timestamp: i64, now: DateTime<Utc>) -> i64 {
    now.timestamp_millis()
        .saturating_sub(timestamp.saturating_mul(1000))
}

/// Long calendar date in UTC, e.g. `January 6, 2014`.
pub fn format_date(timestamp: Option<i64>) -> String {
    let Some(timestamp) = usable(timestamp) else {
        return UNKNOWN_DATE.to_string();
    };
    DateTime::from_timestamp(timestamp, 0)
        .map(|date| date.format(LONG_DATE_FORMAT).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

pub fn format_last_online(timestamp: Option<i64>) -> String {
    format_last_online_at(timestamp, Utc::now())
}

/// Relative "last seen" text: minutes under an hour, hours under a day,
/// whole days otherwise.
pub fn format_last_online_at(timestamp: Option<i64>, now: DateTime<Utc>) -> String {
    let Some(timestamp) = usable(timestamp) else {
        return UNKNOWN_LAST_ONLINE.to_string();
    };

    let elapsed = elapsed_ms(timestamp, now);
    if elapsed < 0 {
        return FUTURE_LAST_ONLINE.to_string();
    }

    let days = elapsed / MS_PER_DAY;
    if days > 0 {
        return format!("{days} days ago");
    }
    let hours = elapsed / MS_PER_HOUR;
    if hours > 0 {
        return format!("{hours} hours ago");
    }
    format!("{} minutes ago", elapsed / MS_PER_MINUTE)
}

/// Whether an elapsed-time display for `timestamp` keeps changing, i.e. the
/// timestamp is usable and not in the future.
pub fn elapsed_is_live(timestamp: Option<i64>, now: DateTime<Utc>) -> bool {
    usable(timestamp).is_some_and(|ts| elapsed_ms(ts, now) >= 0)
}

/// Time since `timestamp` as `HH:MM:SS`. Hours stop at 999 while minutes
/// and seconds keep counting.
pub fn format_elapsed(timestamp: Option<i64>, now: DateTime<Utc>) -> String {
    let Some(timestamp) = usable(timestamp) else {
        return ZERO_ELAPSED.to_string();
    };
    let elapsed = elapsed_ms(timestamp, now);
    if elapsed < 0 {
        return ZERO_ELAPSED.to_string();
    }

    let total_seconds = elapsed / 1000;
    let hours = (total_seconds / 3600).min(MAX_ELAPSED_HOURS);
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
