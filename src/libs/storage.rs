//! Blob persistence for the block collection.
//!
//! The whole collection is stored as a single JSON document in the
//! application data directory. There are no partial updates, no indexing and
//! no transactions: callers read the full list, mutate it in memory and
//! write the full list back. Within a session this read-modify-write cycle
//! is what prevents lost updates; across devices nothing is coordinated
//! (single-user, single-device scope, last writer wins).
//!
//! ## Failure Semantics
//!
//! - [`BlockStore::load`] fails soft: missing, unreadable or corrupt storage
//!   degrades to an empty collection and never raises to the caller.
//! - [`BlockStore::save`] is atomic from the caller's perspective (temp file
//!   plus rename) and surfaces failure as an error so the caller can warn
//!   the user without losing the in-memory list.

use crate::libs::block::TimeBlock;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_warning};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// File name of the persisted block collection.
pub const BLOCKS_FILE_NAME: &str = "blocks.json";

/// Persists and retrieves the full list of time blocks as a single blob.
pub struct BlockStore {
    path: PathBuf,
}

impl BlockStore {
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(BLOCKS_FILE_NAME)?;
        Ok(Self { path })
    }

    /// Returns the persisted collection, or an empty one if no collection
    /// exists or the underlying storage is unreadable or corrupt.
    pub fn load(&self) -> Vec<TimeBlock> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                // First run or storage unavailable; both degrade to empty.
                msg_debug!(format!("Block storage not readable ({}): {}", self.path.display(), e));
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(blocks) => blocks,
            Err(e) => {
                msg_warning!(Message::BlockStorageCorrupt(e.to_string()));
                Vec::new()
            }
        }
    }

    /// Overwrites the entire persisted collection.
    ///
    /// The document is written to a temporary file in the same directory and
    /// renamed over the target, so a failed save never leaves a partially
    /// written collection visible.
    pub fn save(&self, blocks: &[TimeBlock]) -> Result<()> {
        let json = serde_json::to_string_pretty(blocks)?;
        let tmp_path = self.path.with_extension("json.tmp");

        fs::write(&tmp_path, json).with_context(|| format!("Failed to write block storage at {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).with_context(|| format!("Failed to replace block storage at {}", self.path.display()))?;

        Ok(())
    }
}
