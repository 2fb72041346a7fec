//! Core-to-presentation event channel.
//!
//! Core components never render; they emit `UiEvent`s over this bus and
//! whatever frontend is attached (the full-screen UI or a CLI command)
//! drains the receiving end and decides how to show them.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::achievements::AchievementId;

/// Something the presentation layer should show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// An achievement was newly unlocked.
    AchievementUnlocked {
        id: AchievementId,
        message: String,
    },
    /// A transient message with no achievement attached.
    Toast(String),
}

/// Sending half of the event channel.
///
/// Cheap to clone; emitting never blocks and never fails — a frontend
/// that has gone away simply stops receiving.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: Sender<UiEvent>,
}

impl EventBus {
    /// Create a bus and the receiver the frontend drains.
    pub fn channel() -> (Self, Receiver<UiEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }

    /// Emit an event to the frontend.
    pub fn emit(&self, event: UiEvent) {
        // Receiver may be gone in headless runs
        let _ = self.tx.send(event);
    }
}
