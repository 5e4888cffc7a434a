//! Weekly summary command.

use crate::{
    libs::{messages::Message, storage::BlockStore, week},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {}

pub fn cmd(_sum_args: SumArgs) -> Result<()> {
    let blocks = BlockStore::new()?.load();
    if blocks.is_empty() {
        msg_info!(Message::NoBlocksFound);
        return Ok(());
    }

    let stats = week::compute_stats(&blocks);

    msg_print!(Message::SummaryHeader, true);
    msg_print!(week::summary_text(&stats));

    Ok(())
}
