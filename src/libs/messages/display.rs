//! Display implementation for blokk application messages.
//!
//! Converts structured [`Message`] values into the human-readable text shown
//! in the terminal. All wording lives here so the rest of the code never
//! embeds user-facing strings directly.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleWeek => "Week settings".to_string(),
            Message::ConfigModuleExport => "Export settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptFirstDayOfWeek => "First day of the week".to_string(),
            Message::PromptExportDirectory => "Default export directory".to_string(),

            // === BLOCK MESSAGES ===
            Message::BlockCreated(category) => format!("Block '{}' created", category),
            Message::BlockUpdated(category) => format!("Block '{}' updated", category),
            Message::BlockDeleted(category) => format!("Block '{}' deleted", category),
            Message::BlockCompleted(category) => format!("Block '{}' marked as completed", category),
            Message::BlockProgressSet(category, progress) => {
                format!("Block '{}' progress set to {}%", category, progress)
            }
            Message::BlockNotFound(id) => format!("No block found matching '{}'", id),
            Message::BlockTimeInvalid(reason) => format!("Invalid block times: {}", reason),
            Message::NoBlocksFound => "No time blocks planned yet. Add one with 'blokk block add'".to_string(),
            Message::BlocksHeader => "🗓️ Planned time blocks".to_string(),
            Message::ConfirmDeleteBlock(category) => format!("Delete block '{}'?", category),
            Message::PromptSelectBlock => "Select a block".to_string(),
            Message::PromptCategory => "Category".to_string(),
            Message::PromptStartTime => "Start time (HH:MM)".to_string(),
            Message::PromptEndTime => "End time (HH:MM)".to_string(),
            Message::PromptColor => "Color".to_string(),
            Message::PromptProgress => "Progress (0-100)".to_string(),

            // === WEEK MESSAGES ===
            Message::WeekHeader(first, last) => format!("📅 Week of {} - {}", first, last),
            Message::SummaryHeader => "📊 Weekly summary".to_string(),
            Message::ConfirmCopyWeek(count) => {
                format!("Copy all {} blocks into next week with a reset state?", count)
            }
            Message::WeekCopied(count) => format!("{} blocks copied into next week", count),
            Message::CopyCancelled => "Week copy cancelled".to_string(),
            Message::NothingToCopy => "No blocks to copy".to_string(),

            // === STORAGE MESSAGES ===
            Message::BlockStorageCorrupt(error) => {
                format!("Block storage is corrupt, starting from an empty collection: {}", error)
            }
            Message::BlocksNotSaved => "Failed to save blocks, your changes were not persisted".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportSuccess(path) => format!("Summary exported to: {}", path),
            Message::NothingToExport => "No blocks to export".to_string(),

            // === INPUT MESSAGES ===
            Message::InvalidDateFormat(value) => {
                format!("Invalid date '{}', expected YYYY-MM-DD or 'today'", value)
            }
        };
        write!(f, "{}", text)
    }
}
