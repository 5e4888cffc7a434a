//! Time block management command.
//!
//! Creates, lists, edits and deletes the blocks of the daily template, and
//! records completion and progress. Every mutation follows the same
//! read-modify-write cycle against the blob store: load the full list,
//! change it in memory, write the full list back.

use crate::{
    libs::{
        block::TimeBlock,
        messages::Message,
        storage::BlockStore,
        view::View,
    },
    msg_bail_anyhow, msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

/// Default display color for new blocks.
const DEFAULT_COLOR: &str = "#4F46E5";

#[derive(Debug, Args)]
pub struct BlockArgs {
    #[command(subcommand)]
    command: Option<BlockCommand>,
}

#[derive(Debug, Subcommand)]
enum BlockCommand {
    /// Add a new block to the daily template
    Add {
        /// Category label, e.g. "Work" or "Rest"
        #[arg(short, long)]
        category: Option<String>,
        /// Start time as HH:MM
        #[arg(short, long)]
        start: Option<String>,
        /// End time as HH:MM
        #[arg(short, long)]
        end: Option<String>,
        /// Display color token
        #[arg(long)]
        color: Option<String>,
    },
    /// List all planned blocks
    List,
    /// Edit an existing block
    Edit {
        /// Block id (or unique id prefix)
        id: Option<String>,
    },
    /// Mark a block as completed
    Done {
        /// Block id (or unique id prefix)
        id: Option<String>,
    },
    /// Set the progress of a block
    Progress {
        /// Block id (or unique id prefix)
        id: Option<String>,
        /// Progress percentage (0-100)
        #[arg(short, long)]
        value: Option<u8>,
    },
    /// Delete a block
    Delete {
        /// Block id (or unique id prefix)
        id: Option<String>,
    },
}

pub fn cmd(args: BlockArgs) -> Result<()> {
    match args.command {
        Some(BlockCommand::Add { category, start, end, color }) => handle_add(category, start, end, color),
        Some(BlockCommand::Edit { id }) => handle_edit(id),
        Some(BlockCommand::Done { id }) => handle_done(id),
        Some(BlockCommand::Progress { id, value }) => handle_progress(id, value),
        Some(BlockCommand::Delete { id }) => handle_delete(id),
        Some(BlockCommand::List) | None => handle_list(),
    }
}

fn handle_add(category: Option<String>, start: Option<String>, end: Option<String>, color: Option<String>) -> Result<()> {
    let category = match category {
        Some(category) => category,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCategory.to_string())
            .interact_text()?,
    };
    let start = match start {
        Some(start) => start,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStartTime.to_string())
            .interact_text()?,
    };
    let end = match end {
        Some(end) => end,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEndTime.to_string())
            .interact_text()?,
    };
    let color = match color {
        Some(color) => color,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptColor.to_string())
            .default(DEFAULT_COLOR.to_string())
            .interact_text()?,
    };

    let block = TimeBlock::new(&category, &start, &end, &color);
    // Reject malformed or inverted ranges at entry instead of letting them
    // surface later as excluded records in the statistics.
    if let Err(e) = block.duration() {
        msg_bail_anyhow!(Message::BlockTimeInvalid(e.to_string()));
    }

    let store = BlockStore::new()?;
    let mut blocks = store.load();
    blocks.push(block);
    save_or_report(&store, &blocks)?;

    msg_success!(Message::BlockCreated(category));
    Ok(())
}

fn handle_list() -> Result<()> {
    let blocks = BlockStore::new()?.load();
    if blocks.is_empty() {
        msg_info!(Message::NoBlocksFound);
        return Ok(());
    }

    msg_print!(Message::BlocksHeader, true);
    View::blocks(&blocks)
}

fn handle_edit(id: Option<String>) -> Result<()> {
    let store = BlockStore::new()?;
    let mut blocks = store.load();
    let index = find_block(&blocks, id)?;

    let current = blocks[index].clone();
    let category: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptCategory.to_string())
        .default(current.category.clone())
        .interact_text()?;
    let start: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptStartTime.to_string())
        .default(current.start_time.clone())
        .interact_text()?;
    let end: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptEndTime.to_string())
        .default(current.end_time.clone())
        .interact_text()?;
    let color: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptColor.to_string())
        .default(current.color.clone())
        .interact_text()?;

    let updated = TimeBlock {
        category: category.clone(),
        start_time: start,
        end_time: end,
        color,
        ..current
    };
    if let Err(e) = updated.duration() {
        msg_bail_anyhow!(Message::BlockTimeInvalid(e.to_string()));
    }

    blocks[index] = updated;
    save_or_report(&store, &blocks)?;

    msg_success!(Message::BlockUpdated(category));
    Ok(())
}

fn handle_done(id: Option<String>) -> Result<()> {
    let store = BlockStore::new()?;
    let mut blocks = store.load();
    let index = find_block(&blocks, id)?;

    blocks[index].is_completed = true;
    blocks[index].is_active = false;
    let category = blocks[index].category.clone();
    save_or_report(&store, &blocks)?;

    msg_success!(Message::BlockCompleted(category));
    Ok(())
}

fn handle_progress(id: Option<String>, value: Option<u8>) -> Result<()> {
    let store = BlockStore::new()?;
    let mut blocks = store.load();
    let index = find_block(&blocks, id)?;

    let value = match value {
        Some(value) => value,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptProgress.to_string())
            .default(blocks[index].progress)
            .interact_text()?,
    };
    let value = value.min(100);

    blocks[index].progress = value;
    blocks[index].is_active = value > 0 && value < 100;
    if value == 100 {
        blocks[index].is_completed = true;
        blocks[index].is_active = false;
    }
    let category = blocks[index].category.clone();
    save_or_report(&store, &blocks)?;

    msg_success!(Message::BlockProgressSet(category, value));
    Ok(())
}

fn handle_delete(id: Option<String>) -> Result<()> {
    let store = BlockStore::new()?;
    let mut blocks = store.load();
    let index = find_block(&blocks, id)?;
    let category = blocks[index].category.clone();

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteBlock(category.clone()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    blocks.remove(index);
    save_or_report(&store, &blocks)?;

    msg_success!(Message::BlockDeleted(category));
    Ok(())
}

/// Resolves a block either by id/id-prefix or through an interactive pick.
fn find_block(blocks: &[TimeBlock], id: Option<String>) -> Result<usize> {
    if blocks.is_empty() {
        msg_bail_anyhow!(Message::NoBlocksFound);
    }

    match id {
        Some(id) => {
            let matches: Vec<usize> = blocks
                .iter()
                .enumerate()
                .filter(|(_, block)| block.id == id || block.id.starts_with(&id))
                .map(|(index, _)| index)
                .collect();
            match matches.as_slice() {
                [index] => Ok(*index),
                _ => msg_bail_anyhow!(Message::BlockNotFound(id)),
            }
        }
        None => {
            let labels: Vec<String> = blocks
                .iter()
                .map(|block| format!("{} {}-{}", block.category, block.start_time, block.end_time))
                .collect();
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSelectBlock.to_string())
                .items(&labels)
                .default(0)
                .interact()?;
            Ok(selection)
        }
    }
}

/// Saves the collection, keeping the in-memory list intact on failure.
fn save_or_report(store: &BlockStore, blocks: &[TimeBlock]) -> Result<()> {
    if let Err(e) = store.save(blocks) {
        msg_error!(Message::BlocksNotSaved);
        return Err(e);
    }
    Ok(())
}
