//! Console table rendering for blocks and weekly statistics.

use crate::libs::block::TimeBlock;
use crate::libs::formatter::{format_duration, format_hours, format_percent};
use crate::libs::week::WeekStats;
use anyhow::Result;
use chrono::NaiveDate;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the planned block template.
    pub fn blocks(blocks: &[TimeBlock]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "CATEGORY", "START", "END", "DURATION", "PROGRESS", "STATE"]);
        for (index, block) in blocks.iter().enumerate() {
            let duration = match block.duration() {
                Ok(duration) => format_duration(&duration),
                Err(_) => "--:--".to_string(),
            };
            let state = if block.is_completed {
                "done"
            } else if block.is_active {
                "active"
            } else {
                "planned"
            };
            table.add_row(row![
                index + 1,
                block.category,
                block.start_time,
                block.end_time,
                duration,
                format!("{}%", block.effective_progress()),
                state
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders the day-by-day projection of the template across a week.
    ///
    /// The template repeats every day, so each date carries the same block
    /// count and planned hours.
    pub fn week(dates: &[NaiveDate], blocks: &[TimeBlock]) -> Result<()> {
        let daily_blocks = blocks.len();
        let daily_hours: f64 = blocks.iter().filter_map(|block| block.duration_hours().ok()).sum();

        let mut table = Table::new();
        table.add_row(row!["DATE", "DAY", "BLOCKS", "HOURS"]);
        for date in dates {
            table.add_row(row![date.format("%Y-%m-%d"), date.format("%A"), daily_blocks, format_hours(daily_hours)]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders the weekly statistics with the per-category breakdown.
    pub fn stats(stats: &WeekStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["CATEGORY", "HOURS"]);
        for (category, hours) in &stats.category_hours {
            table.add_row(row![category, format_hours(*hours)]);
        }
        table.add_row(row!["TOTAL", format_hours(stats.total_hours)]);
        table.printstd();

        println!(
            "Blocks: {} planned, {} completed ({})",
            stats.total_blocks,
            stats.completed_blocks,
            format_percent(stats.completion_rate())
        );

        Ok(())
    }
}
