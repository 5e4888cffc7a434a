//! Weekly summary export for external analysis and backup.
//!
//! Exports the derived weekly statistics in CSV, JSON or Excel format. The
//! exporter never touches block storage itself; it consumes an already
//! computed [`ExportSummary`] and only performs file output.
//!
//! ## Formats
//!
//! - **CSV**: one row per category plus a totals row, for spreadsheets
//! - **JSON**: the full summary structure, pretty-printed
//! - **Excel**: a formatted worksheet via `rust_xlsxwriter`
//!
//! File names default to a timestamped pattern
//! (`blokk_summary_YYYYMMDD_HHMMSS.ext`) so repeated exports never clobber
//! each other; an explicit output path overrides this.

use crate::libs::week::WeekStats;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for universal compatibility.
    Csv,
    /// Structured JSON for programmatic processing.
    Json,
    /// Excel workbook with basic formatting.
    Excel,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Per-category hours entry in an exported summary.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportCategory {
    pub category: String,
    pub hours: f64,
}

/// Serializable weekly summary ready for export.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportSummary {
    /// First date of the week in YYYY-MM-DD format.
    pub week_start: String,
    /// Last date of the week in YYYY-MM-DD format.
    pub week_end: String,
    /// Planned block count across the whole week.
    pub total_blocks: usize,
    /// Completed block count across the whole week.
    pub completed_blocks: usize,
    /// Completion rate percentage (0.0-100.0).
    pub completion_rate: f64,
    /// Total planned hours for the week.
    pub total_hours: f64,
    /// Per-category hour breakdown in stable sorted order.
    pub categories: Vec<ExportCategory>,
}

impl ExportSummary {
    /// Builds an export summary from computed statistics and the week span.
    pub fn new(stats: &WeekStats, week_start: NaiveDate, week_end: NaiveDate) -> Self {
        ExportSummary {
            week_start: week_start.format("%Y-%m-%d").to_string(),
            week_end: week_end.format("%Y-%m-%d").to_string(),
            total_blocks: stats.total_blocks,
            completed_blocks: stats.completed_blocks,
            completion_rate: stats.completion_rate(),
            total_hours: stats.total_hours,
            categories: stats
                .category_hours
                .iter()
                .map(|(category, hours)| ExportCategory {
                    category: category.clone(),
                    hours: *hours,
                })
                .collect(),
        }
    }
}

/// Writes weekly summaries to disk in the selected format.
pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Self { format, output }
    }

    /// Exports the summary and returns the path written.
    pub fn export(&self, summary: &ExportSummary, output_dir: Option<&str>) -> Result<PathBuf> {
        let path = self.resolve_path(output_dir);

        match self.format {
            ExportFormat::Csv => self.export_csv(summary, &path)?,
            ExportFormat::Json => self.export_json(summary, &path)?,
            ExportFormat::Excel => self.export_excel(summary, &path)?,
        }

        Ok(path)
    }

    fn resolve_path(&self, output_dir: Option<&str>) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }

        let file_name = format!("blokk_summary_{}.{}", Local::now().format("%Y%m%d_%H%M%S"), self.format.extension());
        match output_dir {
            Some(dir) => PathBuf::from(dir).join(file_name),
            None => PathBuf::from(file_name),
        }
    }

    fn export_csv(&self, summary: &ExportSummary, path: &PathBuf) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;

        writer.write_record(["category", "hours"])?;
        for entry in &summary.categories {
            let hours = entry.hours.to_string();
            writer.write_record([entry.category.as_str(), hours.as_str()])?;
        }
        let total_hours = summary.total_hours.to_string();
        writer.write_record(["TOTAL", total_hours.as_str()])?;
        let completion = format!("{:.1}%", summary.completion_rate);
        writer.write_record(["COMPLETION", completion.as_str()])?;
        writer.flush()?;

        Ok(())
    }

    fn export_json(&self, summary: &ExportSummary, path: &PathBuf) -> Result<()> {
        let json = serde_json::to_string_pretty(summary)?;
        File::create(path)?.write_all(json.as_bytes())?;

        Ok(())
    }

    fn export_excel(&self, summary: &ExportSummary, path: &PathBuf) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header_format = Format::new().set_bold();

        worksheet.write_string_with_format(0, 0, "Week", &header_format)?;
        worksheet.write_string(0, 1, format!("{} - {}", summary.week_start, summary.week_end))?;

        worksheet.write_string_with_format(2, 0, "Category", &header_format)?;
        worksheet.write_string_with_format(2, 1, "Hours", &header_format)?;
        let mut current_row = 3;
        for entry in &summary.categories {
            worksheet.write_string(current_row, 0, &entry.category)?;
            worksheet.write_number(current_row, 1, entry.hours)?;
            current_row += 1;
        }

        worksheet.write_string_with_format(current_row, 0, "Total", &header_format)?;
        worksheet.write_number(current_row, 1, summary.total_hours)?;
        worksheet.write_string_with_format(current_row + 1, 0, "Completion %", &header_format)?;
        worksheet.write_number(current_row + 1, 1, summary.completion_rate)?;

        workbook.save(path)?;

        Ok(())
    }
}
