//! Durable snapshot of the achievement flags.
//!
//! One JSON file holding the full name → unlocked mapping. A malformed or
//! unreadable snapshot is logged and replaced by defaults instead of
//! aborting startup; missing storage degrades to in-memory tracking.

use std::fs;
use std::path::{Path, PathBuf};

use super::AchievementSet;

/// Snapshot filename inside the data directory.
pub const SNAPSHOT_FILE: &str = "achievements.json";

/// Environment override for the data directory (used by tests and scripts).
pub const DATA_DIR_ENV: &str = "GARDEN_DATA_DIR";

/// Errors from the snapshot store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no writable data directory for the achievement snapshot")]
    Unavailable,

    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Resolve the data directory.
///
/// `GARDEN_DATA_DIR` wins when set and non-empty; otherwise the platform
/// data directory is used. `None` means no durable storage is available.
pub fn default_data_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::data_dir().map(|dir| dir.join("digital-garden"))
}

/// Handle to the on-disk achievement snapshot.
///
/// A `StateFile` without a path is a valid in-memory-only store: loads
/// return defaults and saves report [`StoreError::Unavailable`] so the
/// caller can degrade gracefully.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: Option<PathBuf>,
}

impl StateFile {
    /// Store at the default data directory (or in-memory when none exists).
    pub fn at_default() -> Self {
        Self {
            path: default_data_dir().map(|dir| dir.join(SNAPSHOT_FILE)),
        }
    }

    /// Store at an explicit snapshot path.
    pub fn new(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Store with no backing file.
    pub fn in_memory() -> Self {
        Self { path: None }
    }

    /// Snapshot path, if this store is file-backed.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load the snapshot, falling back to defaults.
    ///
    /// A missing file is the normal first-run case. A file that fails to
    /// read or parse is logged and treated as absent.
    pub fn load(&self) -> AchievementSet {
        let Some(path) = &self.path else {
            tracing::debug!("no data directory, tracking achievements in memory only");
            return AchievementSet::default();
        };
        if !path.exists() {
            return AchievementSet::default();
        }
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(%err, path = %path.display(), "could not read achievement snapshot, starting fresh");
                return AchievementSet::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(set) => set,
            Err(err) => {
                tracing::warn!(%err, path = %path.display(), "malformed achievement snapshot, starting fresh");
                AchievementSet::default()
            }
        }
    }

    /// Write the full flag mapping to disk.
    pub fn save(&self, set: &AchievementSet) -> Result<(), StoreError> {
        let path = self.path.as_ref().ok_or(StoreError::Unavailable)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(set)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Delete the snapshot. Succeeds when the file is already gone.
    pub fn clear(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Io(err)),
        }
    }
}
