//! Timestamp formatting for article bylines and comments.
//!
//! The API sends RFC 3339 strings. Unparseable or empty input renders as an
//! empty string rather than an error; a missing date is not worth breaking
//! a card over.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::{DateTime, Utc};

/// Current time, from the browser clock when hydrated.
pub fn now() -> DateTime<Utc> {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        DateTime::from_timestamp_millis(js_sys::Date::new_0().get_time() as i64)
            .unwrap_or(DateTime::UNIX_EPOCH)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let unix = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();
        #[allow(clippy::cast_possible_wrap)]
        DateTime::from_timestamp(unix.as_secs() as i64, 0).unwrap_or(DateTime::UNIX_EPOCH)
    }
}

fn parse(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Human-readable relative time ("5 minutes ago").
///
/// Timestamps in the future (clock skew between server and reader) clamp
/// to "just now".
pub fn format_relative(raw: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse(raw) else {
        return String::new();
    };

    let seconds = now.signed_duration_since(then).num_seconds();
    if seconds < 60 {
        return "just now".to_owned();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }
    let days = hours / 24;
    if days < 30 {
        return plural(days, "day");
    }
    let months = days / 30;
    if months < 12 {
        return plural(months, "month");
    }
    plural(months / 12, "year")
}

/// Full date for article detail pages, e.g. "23 May 2024, 15:30".
pub fn format_full(raw: &str) -> String {
    parse(raw)
        .map(|dt| dt.format("%-d %B %Y, %H:%M").to_string())
        .unwrap_or_default()
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
