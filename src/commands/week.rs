//! Week view command: calendar projection plus weekly statistics.

use crate::{
    libs::{config::Config, messages::Message, storage::BlockStore, view::View, week},
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct WeekArgs {
    /// Reference date inside the week to show: 'today' or YYYY-MM-DD
    #[arg(short, long, default_value = "today")]
    date: String,
}

pub fn cmd(args: WeekArgs) -> Result<()> {
    let reference = parse_date_arg(&args.date)?;
    let config = Config::read()?;
    let dates = week::week_dates(reference, config.week_config().first_weekday());

    let blocks = BlockStore::new()?.load();
    if blocks.is_empty() {
        msg_info!(Message::NoBlocksFound);
        return Ok(());
    }

    msg_print!(
        Message::WeekHeader(dates[0].format("%Y-%m-%d").to_string(), dates[6].format("%Y-%m-%d").to_string()),
        true
    );
    View::week(&dates, &blocks)?;

    let stats = week::compute_stats(&blocks);
    View::stats(&stats)?;

    Ok(())
}

/// Parses a date argument: 'today' or an ISO calendar date.
pub(crate) fn parse_date_arg(value: &str) -> Result<NaiveDate> {
    if value.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => msg_bail_anyhow!(Message::InvalidDateFormat(value.to_string())),
    }
}
