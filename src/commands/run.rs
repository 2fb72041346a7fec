//! Default command - launch the full-screen portfolio.

use anyhow::Result;

use garden::achievements::{AchievementTracker, Notifier, StateFile};
use garden::events::EventBus;
use garden::tui::GardenApp;
use garden::{Config, Garden};

/// Build the application context and run the interface.
#[cfg(not(tarpaulin_include))]
pub fn handle_run() -> Result<()> {
    let config = Config::load()?;

    let (bus, rx) = EventBus::channel();
    let store = StateFile::at_default();
    let notifier = if config.notifications.enabled && !config.notifications.base_url.is_empty() {
        Notifier::spawn(config.notifications.base_url.clone())
    } else {
        Notifier::disabled()
    };
    let tracker = AchievementTracker::new(store, notifier, bus.clone());
    let garden = Garden::new(config, tracker, bus);

    GardenApp::new(garden, rx).run()
}
