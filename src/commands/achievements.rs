//! `garden achievements` - list and reset unlock state.

use anyhow::Result;

use garden::achievements::{
    AchievementId, AchievementTracker, Notifier, StateFile, RESET_MESSAGE,
};
use garden::events::{EventBus, UiEvent};
use garden::tui::current_theme;

use super::prompt_confirmation;

/// Print every achievement with its unlock status.
pub fn handle_list() -> Result<()> {
    let theme = current_theme();
    let flags = StateFile::at_default().load();

    println!("{}", theme.accent_text("Achievements"));
    println!();
    for id in AchievementId::ALL {
        let mark = if flags.get(id) {
            theme.success_text("[✓]")
        } else {
            theme.secondary_text("[ ]")
        };
        println!("{} {:<16} {}", mark, id.name(), theme.primary_text(id.message()));
    }
    println!();
    println!(
        "{}",
        theme.secondary_text(&format!(
            "{}/{} unlocked",
            flags.unlocked_count(),
            AchievementId::ALL.len()
        ))
    );
    Ok(())
}

/// Reset all achievements after confirmation.
pub fn handle_reset(yes: bool) -> Result<()> {
    let theme = current_theme();

    if !yes && !prompt_confirmation("Reset all achievements?")? {
        println!("{}", theme.primary_text("Achievements left unchanged."));
        return Ok(());
    }

    let (bus, rx) = EventBus::channel();
    let mut tracker = AchievementTracker::new(StateFile::at_default(), Notifier::disabled(), bus);
    tracker.reset();

    // The reset announcement arrives on the event bus like any other
    let mut announced = false;
    for event in rx.try_iter() {
        if let UiEvent::Toast(message) = event {
            println!("{}", theme.success_text(&message));
            announced = true;
        }
    }
    if !announced {
        println!("{}", theme.success_text(RESET_MESSAGE));
    }
    Ok(())
}
