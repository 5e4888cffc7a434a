//! Display formatting utilities for durations and hour totals.
//!
//! All durations use the same "HH:MM" format; aggregate hour values are
//! rounded half-up to whole hours for summary display. Negative values are
//! clamped to zero so a degenerate record can never render as negative time.

use chrono::Duration;

/// Formats a duration as a zero-padded "HH:MM" string.
///
/// Seconds are truncated to the minute and negative durations render
/// as "00:00".
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats an hour total rounded half-up to the nearest whole hour.
pub fn format_hours(hours: f64) -> String {
    format!("{}h", hours.round().max(0.0) as i64)
}

/// Formats a completion rate rounded half-up to a whole percentage.
pub fn format_percent(rate: f64) -> String {
    format!("{}%", rate.round().max(0.0) as i64)
}
