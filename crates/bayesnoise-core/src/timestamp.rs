//! ISO-8601 UTC timestamps with millisecond resolution.

use std::time::Duration;

use crate::store::{Clock, SystemClock};

/// Current wall-clock time as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn now_iso8601_millis() -> String {
    format_iso8601_millis(SystemClock.now())
}

/// Format a duration-since-epoch as a full ISO-8601 timestamp with millis.
/// Example: `2026-02-15T01:30:00.250Z`
pub fn format_iso8601_millis(since_epoch: Duration) -> String {
    let (year, month, day, hour, min, sec) = secs_to_utc(since_epoch.as_secs());
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        year,
        month,
        day,
        hour,
        min,
        sec,
        since_epoch.subsec_millis()
    )
}

/// Convert seconds since Unix epoch to (year, month, day, hour, minute, second) UTC.
/// No leap second handling.
fn secs_to_utc(secs: u64) -> (u64, u64, u64, u64, u64, u64) {
    let sec = secs % 60;
    let min = (secs / 60) % 60;
    let hour = (secs / 3600) % 24;

    let mut days = secs / 86400;
    let mut year = 1970u64;
    loop {
        let days_in_year = if is_leap(year) { 366 } else { 365 };
        if days < days_in_year {
            break;
        }
        days -= days_in_year;
        year += 1;
    }

    let february = if is_leap(year) { 29 } else { 28 };
    let months_days: [u64; 12] = [31, february, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    let mut month = 12u64;
    for (i, &md) in months_days.iter().enumerate() {
        if days < md {
            month = i as u64 + 1;
            break;
        }
        days -= md;
    }

    (year, month, days + 1, hour, min, sec)
}

fn is_leap(year: u64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
