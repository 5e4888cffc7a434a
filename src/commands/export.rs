//! Summary export command.
//!
//! Computes the weekly statistics and writes them to CSV, JSON or Excel.
//! The target week defaults to the current one; `--date` selects the week
//! containing another date.

use crate::{
    libs::{
        config::Config,
        export::{ExportFormat, ExportSummary, Exporter},
        messages::Message,
        storage::BlockStore,
        week,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported summary
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path; a timestamped name is generated otherwise
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Reference date inside the week to export: 'today' or YYYY-MM-DD
    #[arg(short, long, default_value = "today")]
    date: String,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let blocks = BlockStore::new()?.load();
    if blocks.is_empty() {
        msg_info!(Message::NothingToExport);
        return Ok(());
    }

    let reference = super::week::parse_date_arg(&args.date)?;
    let config = Config::read()?;
    let dates = week::week_dates(reference, config.week_config().first_weekday());

    let stats = week::compute_stats(&blocks);
    let summary = ExportSummary::new(&stats, dates[0], dates[6]);

    let output_dir = config.export.as_ref().and_then(|export| export.output_dir.as_deref());
    let path = Exporter::new(args.format, args.output).export(&summary, output_dir)?;

    msg_success!(Message::ExportSuccess(path.display().to_string()));
    Ok(())
}
