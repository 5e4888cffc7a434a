//! Weekly aggregation of the block template.
//!
//! Pure, deterministic transformations from a block collection (plus an
//! optional reference date) to derived statistics and calendar projections.
//! Nothing here performs I/O or holds hidden state; every function takes the
//! full collection and any date context as explicit parameters.
//!
//! ## Template Model
//!
//! The stored block list is a repeating daily template applied to every day
//! of the week, not a per-day ledger. All counters and hour totals therefore
//! carry a factor of seven: two blocks in the template mean fourteen planned
//! blocks in the week.
//!
//! ## Malformed Records
//!
//! A block whose times do not parse, or whose range is empty or inverted,
//! contributes zero hours. It still counts toward the planned block total,
//! and it never aborts aggregation of the remaining valid records.

use crate::libs::block::TimeBlock;
use crate::msg_debug;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Number of days the daily template is projected across.
pub const DAYS_PER_WEEK: usize = 7;

/// Derived weekly aggregate metrics. Recomputed on demand, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekStats {
    /// Planned block count for the whole week (template size x 7).
    pub total_blocks: usize,
    /// Completed block count for the whole week (completed x 7).
    pub completed_blocks: usize,
    /// Total planned hours for the whole week.
    pub total_hours: f64,
    /// Planned hours per category, in stable sorted order.
    pub category_hours: BTreeMap<String, f64>,
}

impl WeekStats {
    /// Completion rate as a percentage in [0, 100].
    ///
    /// Defined as 0 for an empty collection rather than a division error.
    pub fn completion_rate(&self) -> f64 {
        if self.total_blocks == 0 {
            return 0.0;
        }
        self.completed_blocks as f64 / self.total_blocks as f64 * 100.0
    }
}

/// Returns the 7 consecutive dates of the week containing `reference`,
/// starting from `first_day`.
pub fn week_dates(reference: NaiveDate, first_day: Weekday) -> [NaiveDate; DAYS_PER_WEEK] {
    let offset = (DAYS_PER_WEEK as i64 + reference.weekday().num_days_from_monday() as i64 - first_day.num_days_from_monday() as i64)
        % DAYS_PER_WEEK as i64;
    let start = reference - Duration::days(offset);
    core::array::from_fn(|day| start + Duration::days(day as i64))
}

/// Derives weekly statistics from the daily block template.
///
/// Pure function of its input; calling it twice on the same collection
/// yields identical output.
pub fn compute_stats(blocks: &[TimeBlock]) -> WeekStats {
    let mut stats = WeekStats {
        total_blocks: blocks.len() * DAYS_PER_WEEK,
        ..Default::default()
    };

    for block in blocks {
        if block.is_completed {
            stats.completed_blocks += DAYS_PER_WEEK;
        }

        // Record-level isolation: a malformed block contributes zero hours
        // but must not corrupt the totals of the remaining valid blocks.
        let weekly_hours = match block.duration_hours() {
            Ok(hours) => hours * DAYS_PER_WEEK as f64,
            Err(e) => {
                msg_debug!(format!("Skipping block '{}' in hour totals: {}", block.id, e));
                continue;
            }
        };

        stats.total_hours += weekly_hours;
        *stats.category_hours.entry(block.category.clone()).or_insert(0.0) += weekly_hours;
    }

    stats
}

/// Produces the week-copy batch: one new block per input block with a fresh
/// unique id and a reset, unstarted state. All other fields are copied
/// verbatim and the input is left untouched.
///
/// The caller is responsible for concatenating the result with the existing
/// collection and persisting it.
pub fn duplicate_for_next_week(blocks: &[TimeBlock]) -> Vec<TimeBlock> {
    blocks
        .iter()
        .map(|block| TimeBlock {
            id: Uuid::new_v4().to_string(),
            is_active: false,
            is_completed: false,
            progress: 0,
            ..block.clone()
        })
        .collect()
}

/// Renders the weekly statistics as a stable, line-oriented summary.
///
/// Hours and the completion percentage are rounded half-up to the nearest
/// integer for display; categories are listed in sorted order.
pub fn summary_text(stats: &WeekStats) -> String {
    let mut lines = vec![
        "Weekly Summary".to_string(),
        format!("Planned: {}h across {} blocks", stats.total_hours.round() as i64, stats.total_blocks),
        format!("Completed: {}%", stats.completion_rate().round() as i64),
    ];
    for (category, hours) in &stats.category_hours {
        lines.push(format!("{}: {}h", category, hours.round() as i64));
    }
    lines.join("\n")
}
