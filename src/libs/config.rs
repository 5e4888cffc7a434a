//! Configuration management for the blokk application.
//!
//! Settings are stored as pretty-printed JSON in the platform-specific
//! application data directory and loaded with defaults when no file exists.
//! Each module is optional so the configuration file only carries what the
//! user actually set up, and `blokk init` runs an interactive wizard for
//! selecting and filling in modules.
//!
//! ## Modules
//!
//! - **Week**: calendar conventions, currently the first day of the week
//! - **Export**: default directory for exported summary files

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use chrono::Weekday;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module shown in the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Calendar conventions for the weekly views.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WeekConfig {
    /// First day of the week: "sunday" or "monday".
    pub first_day: String,
}

impl Default for WeekConfig {
    fn default() -> Self {
        WeekConfig {
            first_day: "sunday".to_string(),
        }
    }
}

impl WeekConfig {
    /// Resolves the configured first day; unknown values fall back to Sunday.
    pub fn first_weekday(&self) -> Weekday {
        match self.first_day.to_lowercase().as_str() {
            "monday" => Weekday::Mon,
            _ => Weekday::Sun,
        }
    }

    fn init(current: &Option<WeekConfig>) -> Result<Self> {
        let default = current.clone().unwrap_or_default();
        let options = ["sunday", "monday"];
        let initial = options.iter().position(|d| *d == default.first_day).unwrap_or(0);

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptFirstDayOfWeek.to_string())
            .items(&options)
            .default(initial)
            .interact()?;

        Ok(WeekConfig {
            first_day: options[selection].to_string(),
        })
    }
}

/// Defaults for summary export.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ExportConfig {
    /// Directory exported files are written to; current directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
}

impl ExportConfig {
    fn init(current: &Option<ExportConfig>) -> Result<Self> {
        let default = current.clone().unwrap_or_default();

        let output_dir: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptExportDirectory.to_string())
            .default(default.output_dir.unwrap_or_else(|| ".".to_string()))
            .interact_text()?;

        Ok(ExportConfig {
            output_dir: Some(output_dir),
        })
    }
}

/// Root configuration object; every module is optional.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week: Option<WeekConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportConfig>,
}

impl Config {
    /// Reads the configuration, returning defaults when no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Effective week settings, falling back to defaults when unconfigured.
    pub fn week_config(&self) -> WeekConfig {
        self.week.clone().unwrap_or_default()
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Starts from the existing configuration so current values appear as
    /// defaults, presents the module list and configures each selection.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "week".to_string(),
                name: "Week".to_string(),
            },
            ConfigModule {
                key: "export".to_string(),
                name: "Export".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "week" => {
                    msg_print!(Message::ConfigModuleWeek);
                    config.week = Some(WeekConfig::init(&config.week)?);
                }
                "export" => {
                    msg_print!(Message::ConfigModuleExport);
                    config.export = Some(ExportConfig::init(&config.export)?);
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
