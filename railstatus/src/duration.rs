//! Human readable elapsed-time formatting
//!
//! Breaks a number of seconds down into months/days/hours/minutes/seconds
//! using a 30-day month. Unit labels are always plural ("1 months").

/// Seconds in a (30-day) month
pub const SECONDS_PER_MONTH: u64 = 30 * SECONDS_PER_DAY;
/// Seconds in a day
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
/// Seconds in an hour
pub const SECONDS_PER_HOUR: u64 = 3600;
/// Seconds in a minute
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Unit labels in descending order
pub const UNIT_LABELS: [&str; 5] = ["months", "days", "hours", "minutes", "seconds"];

/// Format a number of seconds as a comma separated breakdown.
///
/// Zero components are skipped; when every component is zero the result is
/// an empty string and the caller picks a fallback label.
///
/// ```
/// use railstatus::duration::format_duration;
///
/// assert_eq!(format_duration(3661), "1 hours, 1 minutes, 1 seconds");
/// assert_eq!(format_duration(0), "");
/// ```
pub fn format_duration(total_seconds: u64) -> String {
    let months = total_seconds / SECONDS_PER_MONTH;
    let rest = total_seconds % SECONDS_PER_MONTH;

    let days = rest / SECONDS_PER_DAY;
    let rest = rest % SECONDS_PER_DAY;

    let hours = rest / SECONDS_PER_HOUR;
    let rest = rest % SECONDS_PER_HOUR;

    let minutes = rest / SECONDS_PER_MINUTE;
    let seconds = rest % SECONDS_PER_MINUTE;

    [months, days, hours, minutes, seconds]
        .iter()
        .zip(UNIT_LABELS)
        .filter(|(value, _)| **value > 0)
        .map(|(value, unit)| format!("{value} {unit}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Describe an optional elapsed-seconds value, falling back to `fallback`.
///
/// `None`, zero and negative values (clock skew) all map to the fallback.
pub fn describe(seconds: Option<i64>, fallback: &str) -> String {
    match seconds {
        Some(secs) if secs > 0 => format_duration(secs as u64),
        _ => fallback.to_string(),
    }
}
