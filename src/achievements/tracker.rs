//! Unlock and reset logic on top of the snapshot store.

use super::{unlock_message, AchievementId, AchievementSet, Notifier, StateFile};
use crate::events::{EventBus, UiEvent};

/// Message emitted when all achievements are reset.
pub const RESET_MESSAGE: &str = "Achievements reset! 🔄";

/// Tracks which achievements are unlocked.
///
/// Unlocks are at-most-once per name: the first call persists the mapping,
/// queues the outbound notification, and emits a display event; later calls
/// for the same name are no-ops. When the store stops accepting writes the
/// tracker logs once and keeps progress in memory for the rest of the
/// process.
pub struct AchievementTracker {
    flags: AchievementSet,
    store: StateFile,
    notifier: Notifier,
    events: EventBus,
    degraded: bool,
}

impl AchievementTracker {
    /// Load persisted flags and wire up the notification and event sinks.
    pub fn new(store: StateFile, notifier: Notifier, events: EventBus) -> Self {
        let flags = store.load();
        Self {
            flags,
            store,
            notifier,
            events,
            degraded: false,
        }
    }

    /// Current flag mapping.
    pub fn flags(&self) -> &AchievementSet {
        &self.flags
    }

    /// Whether the given achievement is unlocked.
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.flags.get(id)
    }

    /// Number of unlocked achievements.
    pub fn unlocked_count(&self) -> usize {
        self.flags.unlocked_count()
    }

    /// Unlock an achievement.
    ///
    /// Returns `true` when the flag was newly set. Already-unlocked names
    /// do nothing: no write, no notification, no event.
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        if self.flags.get(id) {
            return false;
        }
        self.flags.unlock(id);
        self.persist();
        self.notifier.notify(id.name());
        self.events.emit(UiEvent::AchievementUnlocked {
            id,
            message: unlock_message(id.name()).to_string(),
        });
        true
    }

    /// Reset every flag and delete the snapshot.
    ///
    /// Callers are responsible for confirming with the user first.
    pub fn reset(&mut self) {
        self.flags = AchievementSet::default();
        if let Err(err) = self.store.clear() {
            tracing::warn!(%err, "could not delete achievement snapshot");
        }
        self.degraded = false;
        self.events.emit(UiEvent::Toast(RESET_MESSAGE.to_string()));
    }

    fn persist(&mut self) {
        if self.degraded {
            return;
        }
        if let Err(err) = self.store.save(&self.flags) {
            tracing::warn!(%err, "achievement storage unavailable, keeping progress in memory only");
            self.degraded = true;
        }
    }
}
