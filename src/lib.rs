//! # Blokk - Block-based day planning
//!
//! A command-line utility for planning daily time blocks, tracking their
//! completion and reviewing weekly statistics.
//!
//! ## Features
//!
//! - **Time Blocks**: Plan the day as a template of categorized time blocks
//! - **Weekly Statistics**: Total hours, completion rate and category breakdown
//! - **Week Copy**: Duplicate the current template into a fresh, unstarted week
//! - **Summaries**: Human-readable weekly summary reports
//! - **Data Export**: Export summaries to CSV, JSON and Excel formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use blokk::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
