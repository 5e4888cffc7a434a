//! Week-copy command.
//!
//! Duplicates every planned block into a fresh, unstarted batch for the next
//! week: new ids, completion and progress reset, everything else copied. The
//! new batch is appended to the stored collection in one read-modify-write
//! cycle so a concurrent edit within the session cannot be half-applied.

use crate::{
    libs::{messages::Message, storage::BlockStore, week},
    msg_error, msg_info, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct CopyArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: CopyArgs) -> Result<()> {
    let store = BlockStore::new()?;
    let blocks = store.load();
    if blocks.is_empty() {
        msg_warning!(Message::NothingToCopy);
        return Ok(());
    }

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmCopyWeek(blocks.len()).to_string())
            .default(true)
            .interact()?;
        if !confirmed {
            msg_info!(Message::CopyCancelled);
            return Ok(());
        }
    }

    let copies = week::duplicate_for_next_week(&blocks);
    let produced = copies.len();

    let mut all_blocks = blocks;
    all_blocks.extend(copies);
    if let Err(e) = store.save(&all_blocks) {
        // The in-memory list is untouched; surface the failure and let the
        // user retry instead of silently dropping the batch.
        msg_error!(Message::BlocksNotSaved);
        return Err(e);
    }

    msg_info!(Message::WeekCopied(produced));
    Ok(())
}
