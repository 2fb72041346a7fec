//! Tests for achievement persistence and idempotence

use garden::achievements::{
    AchievementId, AchievementTracker, Notifier, StateFile, SNAPSHOT_FILE,
};
use garden::events::{EventBus, UiEvent};

fn tracker_in(
    dir: &tempfile::TempDir,
) -> (AchievementTracker, std::sync::mpsc::Receiver<UiEvent>) {
    let (bus, rx) = EventBus::channel();
    let store = StateFile::new(dir.path().join(SNAPSHOT_FILE));
    (
        AchievementTracker::new(store, Notifier::disabled(), bus),
        rx,
    )
}

#[test]
fn double_unlock_writes_once_and_emits_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(SNAPSHOT_FILE);
    let (mut tracker, rx) = tracker_in(&dir);

    assert!(tracker.unlock(AchievementId::Konami));
    assert!(path.exists());

    // Removing the snapshot exposes any second write
    std::fs::remove_file(&path).unwrap();
    assert!(!tracker.unlock(AchievementId::Konami));
    assert!(!path.exists(), "idempotent unlock must not write again");

    let events: Vec<_> = rx.try_iter().collect();
    assert_eq!(events.len(), 1, "idempotent unlock must not emit again");
}

#[test]
fn reset_deletes_snapshot_and_locks_everything() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(SNAPSHOT_FILE);
    let (mut tracker, _rx) = tracker_in(&dir);

    for id in AchievementId::ALL {
        tracker.unlock(id);
    }
    assert_eq!(tracker.unlocked_count(), AchievementId::ALL.len());

    tracker.reset();

    assert!(!path.exists());
    for id in AchievementId::ALL {
        assert!(!tracker.is_unlocked(id));
    }
}

#[test]
fn partial_snapshot_overrides_defaults_only() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(SNAPSHOT_FILE), r#"{"konami": true}"#).unwrap();

    let (tracker, _rx) = tracker_in(&dir);

    assert!(tracker.is_unlocked(AchievementId::Konami));
    for id in AchievementId::ALL {
        if id != AchievementId::Konami {
            assert!(!tracker.is_unlocked(id), "{id} should default to locked");
        }
    }
}

#[test]
fn malformed_snapshot_starts_fresh_instead_of_failing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(SNAPSHOT_FILE), "]]] not json [[[").unwrap();

    let (mut tracker, _rx) = tracker_in(&dir);
    assert_eq!(tracker.unlocked_count(), 0);

    // Tracking still works after the fallback
    assert!(tracker.unlock(AchievementId::Explorer));
    let (tracker, _rx) = tracker_in(&dir);
    assert!(tracker.is_unlocked(AchievementId::Explorer));
}
