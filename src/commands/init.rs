//! Application configuration initialization command.
//!
//! Provides an interactive setup wizard that guides users through
//! configuring blokk for first-time use: week conventions and export
//! defaults.

use crate::{
    libs::{config::Config, data_storage::DataStorage, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    // Deletion mode resets the application to its initial state.
    if init_args.delete {
        let config_path = DataStorage::new().get_path(crate::libs::config::CONFIG_FILE_NAME)?;
        if config_path.exists() {
            fs::remove_file(config_path)?;
        }
        return Ok(());
    }

    // Run the interactive configuration wizard and persist the result.
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
