//! Application context.
//!
//! One `Garden` is constructed at startup and owns the core components:
//! the achievement tracker, the console session and its interpreter, the
//! hidden-sequence matcher, and the counters behind the easter-egg
//! unlocks. Frontends feed it input and drain the event bus; nothing in
//! here renders.

use std::collections::HashSet;

use crate::achievements::{unlock_message, AchievementId, AchievementTracker};
use crate::config::Config;
use crate::events::{EventBus, UiEvent};
use crate::konami::{InputCode, KonamiBuffer};
use crate::terminal::{Interpreter, TerminalSession};

/// Distinct sections that must be viewed to unlock `explorer`.
pub const EXPLORER_SECTIONS: usize = 5;

/// Clicks needed to unlock `clicker`.
pub const CLICKER_CLICKS: u32 = 42;

/// Distinct recognized commands needed to unlock `keyboard_master`.
pub const KEYBOARD_COMMANDS: usize = 5;

/// Toast shown shortly after startup.
pub const WELCOME_MESSAGE: &str = "Welcome to the Digital Garden! 🌱";

/// Extra toast for the 42nd click.
pub const CLICKER_BONUS_MESSAGE: &str =
    "The Answer to Life, the Universe, and Everything! 🤖";

/// The application context tying the core components together.
pub struct Garden {
    config: Config,
    tracker: AchievementTracker,
    session: TerminalSession,
    interpreter: Interpreter,
    konami: KonamiBuffer,
    events: EventBus,
    explored: HashSet<&'static str>,
    clicks: u32,
    commands_used: HashSet<&'static str>,
}

impl Garden {
    pub fn new(config: Config, tracker: AchievementTracker, events: EventBus) -> Self {
        let interpreter = Interpreter::new(config.profile.clone());
        Self {
            config,
            tracker,
            session: TerminalSession::new(),
            interpreter,
            konami: KonamiBuffer::new(),
            events,
            explored: HashSet::new(),
            clicks: 0,
            commands_used: HashSet::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &TerminalSession {
        &self.session
    }

    pub fn tracker(&self) -> &AchievementTracker {
        &self.tracker
    }

    /// Feed one key press into the hidden-sequence matcher.
    ///
    /// On a completed sequence this unlocks `konami`, toggles the console,
    /// and returns `true` so the frontend can switch focus.
    pub fn key_input(&mut self, code: InputCode) -> bool {
        if self.konami.push(code) {
            self.unlock(AchievementId::Konami);
            self.session.toggle();
            true
        } else {
            false
        }
    }

    /// Record that a portfolio section was viewed.
    pub fn section_viewed(&mut self, section: &'static str) {
        if self.explored.insert(section) && self.explored.len() >= EXPLORER_SECTIONS {
            self.unlock(AchievementId::Explorer);
        }
    }

    /// Record one pointer click.
    pub fn pointer_clicked(&mut self) {
        self.clicks += 1;
        if self.clicks == CLICKER_CLICKS && self.unlock(AchievementId::Clicker) {
            self.events
                .emit(UiEvent::Toast(CLICKER_BONUS_MESSAGE.to_string()));
        }
    }

    /// Record a submitted contact form.
    pub fn contact_submitted(&mut self) {
        self.unlock(AchievementId::GardenKeeper);
    }

    /// Execute one console command line.
    pub fn run_command(&mut self, input: &str) {
        if let Some(name) = self.interpreter.execute(&mut self.session, input) {
            if self.commands_used.insert(name) && self.commands_used.len() >= KEYBOARD_COMMANDS {
                self.unlock(AchievementId::KeyboardMaster);
            }
        }
    }

    /// Close the console without clearing it.
    pub fn close_terminal(&mut self) {
        self.session.close();
    }

    /// Reset all achievements. Confirmation happens in the frontend.
    pub fn reset_achievements(&mut self) {
        self.tracker.reset();
    }

    fn unlock(&mut self, id: AchievementId) -> bool {
        if self.tracker.unlock(id) {
            self.session
                .push_notice(format!("🎉 Achievement unlocked: {}", unlock_message(id.name())));
            true
        } else {
            false
        }
    }
}
