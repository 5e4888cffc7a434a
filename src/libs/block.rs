//! Time block data model and validation.
//!
//! A time block is a single planned activity slot: a category, a wall-clock
//! time range within one day, a display color token and a completion state.
//! The stored collection acts as a repeating daily template; the weekly
//! aggregation in [`crate::libs::week`] consumes it read-only.
//!
//! Times are kept as "HH:MM" strings, exactly as they are persisted, and are
//! parsed on demand. Parsing failures and inverted ranges are typed errors
//! rather than silent zero or negative durations, so a single malformed
//! record can be isolated without corrupting aggregate totals.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Wall-clock time format used for block boundaries.
pub const TIME_FORMAT: &str = "%H:%M";

/// Validation errors for a single time block record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("invalid time value '{0}', expected HH:MM")]
    InvalidTimeFormat(String),
    #[error("block ends at or before it starts ({start} -> {end})")]
    InvalidTimeRange { start: String, end: String },
}

/// A single planned activity slot.
///
/// Field names serialize in camelCase, matching the persisted JSON format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBlock {
    /// Opaque unique identifier, unique within a stored collection.
    pub id: String,
    /// Block start as "HH:MM" wall-clock time, no date component.
    pub start_time: String,
    /// Block end as "HH:MM"; expected to be later than the start
    /// within the same day (overnight blocks are not modeled).
    pub end_time: String,
    /// Free-text category label used for grouping.
    pub category: String,
    /// Display color token, opaque to all aggregation logic.
    pub color: String,
    /// Whether this block is the currently in-progress one.
    #[serde(default)]
    pub is_active: bool,
    /// Terminal completion state.
    #[serde(default)]
    pub is_completed: bool,
    /// Fractional completion in [0, 100]; ignored once completed.
    #[serde(default)]
    pub progress: u8,
}

impl TimeBlock {
    /// Creates a new, unstarted block with a fresh unique id.
    pub fn new(category: &str, start_time: &str, end_time: &str, color: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            category: category.to_string(),
            color: color.to_string(),
            is_active: false,
            is_completed: false,
            progress: 0,
        }
    }

    /// Parses an "HH:MM" time-of-day value.
    pub fn parse_time(value: &str) -> Result<NaiveTime, BlockError> {
        NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|_| BlockError::InvalidTimeFormat(value.to_string()))
    }

    /// Returns the planned duration of the block.
    ///
    /// Both endpoints are parsed as time-of-day values anchored to the same
    /// day and subtracted. An unparseable endpoint or an empty/inverted
    /// range is an error; callers decide whether to skip the record.
    pub fn duration(&self) -> Result<Duration, BlockError> {
        let start = Self::parse_time(&self.start_time)?;
        let end = Self::parse_time(&self.end_time)?;
        let duration = end - start;
        if duration <= Duration::zero() {
            return Err(BlockError::InvalidTimeRange {
                start: self.start_time.clone(),
                end: self.end_time.clone(),
            });
        }
        Ok(duration)
    }

    /// Planned duration in fractional hours.
    pub fn duration_hours(&self) -> Result<f64, BlockError> {
        Ok(self.duration()?.num_minutes() as f64 / 60.0)
    }

    /// Effective progress for display; completed blocks always report 100.
    pub fn effective_progress(&self) -> u8 {
        if self.is_completed {
            100
        } else {
            self.progress.min(100)
        }
    }
}
