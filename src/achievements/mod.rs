//! Achievement tracking
//!
//! Named one-way unlock flags with a persisted JSON snapshot and a
//! best-effort unlock notification. Flags only revert through a full
//! reset.

mod notify;
mod store;
mod tracker;

pub use notify::Notifier;
pub use store::{default_data_dir, StateFile, StoreError, DATA_DIR_ENV, SNAPSHOT_FILE};
pub use tracker::{AchievementTracker, RESET_MESSAGE};

use serde::{Deserialize, Serialize};

/// A named user milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    /// Entered the hidden key sequence
    Konami,
    /// Visited enough portfolio sections
    Explorer,
    /// Clicked 42 times
    Clicker,
    /// Ran enough distinct console commands
    KeyboardMaster,
    /// Sent the contact form
    GardenKeeper,
}

impl AchievementId {
    /// All achievements in display order.
    pub const ALL: [AchievementId; 5] = [
        AchievementId::Konami,
        AchievementId::Explorer,
        AchievementId::Clicker,
        AchievementId::KeyboardMaster,
        AchievementId::GardenKeeper,
    ];

    /// Stable name used in the snapshot file and the notification URL.
    pub fn name(&self) -> &'static str {
        match self {
            AchievementId::Konami => "konami",
            AchievementId::Explorer => "explorer",
            AchievementId::Clicker => "clicker",
            AchievementId::KeyboardMaster => "keyboard_master",
            AchievementId::GardenKeeper => "garden_keeper",
        }
    }

    /// Look up an achievement by its stable name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.name() == name)
    }

    /// Human-readable unlock message for this achievement.
    pub fn message(&self) -> &'static str {
        unlock_message(self.name())
    }
}

impl std::fmt::Display for AchievementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unlock message for an achievement name.
///
/// Names outside the fixed table get a generic fallback.
pub fn unlock_message(name: &str) -> &'static str {
    match name {
        "konami" => "Konami Code Master! 🎮",
        "explorer" => "Garden Explorer! 🗺️",
        "clicker" => "Click Master! 🖱️",
        "keyboard_master" => "Keyboard Ninja! ⌨️",
        "garden_keeper" => "Garden Keeper! 🌱",
        _ => "Achievement Unlocked! 🏆",
    }
}

/// Unlock flags for every achievement.
///
/// Serialized as a flat JSON object keyed by achievement name. Keys absent
/// from a loaded snapshot keep their default (`false`), so snapshots written
/// by older builds merge cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementSet {
    #[serde(default)]
    pub konami: bool,
    #[serde(default)]
    pub explorer: bool,
    #[serde(default)]
    pub clicker: bool,
    #[serde(default)]
    pub keyboard_master: bool,
    #[serde(default)]
    pub garden_keeper: bool,
}

impl AchievementSet {
    /// Whether the given achievement is unlocked.
    pub fn get(&self, id: AchievementId) -> bool {
        match id {
            AchievementId::Konami => self.konami,
            AchievementId::Explorer => self.explorer,
            AchievementId::Clicker => self.clicker,
            AchievementId::KeyboardMaster => self.keyboard_master,
            AchievementId::GardenKeeper => self.garden_keeper,
        }
    }

    /// Mark the given achievement as unlocked.
    pub fn unlock(&mut self, id: AchievementId) {
        match id {
            AchievementId::Konami => self.konami = true,
            AchievementId::Explorer => self.explorer = true,
            AchievementId::Clicker => self.clicker = true,
            AchievementId::KeyboardMaster => self.keyboard_master = true,
            AchievementId::GardenKeeper => self.garden_keeper = true,
        }
    }

    /// Number of unlocked achievements.
    pub fn unlocked_count(&self) -> usize {
        AchievementId::ALL.iter().filter(|id| self.get(**id)).count()
    }
}
