pub mod block;
pub mod copy;
pub mod export;
pub mod init;
pub mod sum;
pub mod week;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage the daily block template")]
    Block(block::BlockArgs),
    #[command(about = "Show the week calendar and statistics")]
    Week(week::WeekArgs),
    #[command(about = "Get the weekly summary")]
    Sum(sum::SumArgs),
    #[command(about = "Copy all blocks into next week")]
    Copy(copy::CopyArgs),
    #[command(about = "Export the weekly summary")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        init_tracing();

        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Block(args) => block::cmd(args),
            Commands::Week(args) => week::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
            Commands::Copy(args) => copy::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Installs the tracing subscriber when debug mode is active; in normal mode
/// the message macros print directly and no subscriber is needed.
fn init_tracing() {
    if crate::libs::messages::macros::is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}
