//! garden binary entry point.

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{AchievementsAction, Cli, Command, ConfigAction};
use garden::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Interactive runs log to a file so the alternate screen stays clean
    logging::init(cli.command.is_none())?;

    match cli.command {
        None => commands::run::handle_run(),
        Some(Command::Exec { command }) => commands::exec::handle_exec(&command.join(" ")),
        Some(Command::Achievements { action }) => match action {
            None => commands::achievements::handle_list(),
            Some(AchievementsAction::Reset { yes }) => commands::achievements::handle_reset(yes),
        },
        Some(Command::Config { action }) => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Path => commands::config::handle_path(),
            ConfigAction::Edit => commands::config::handle_edit(),
            ConfigAction::Migrate { yes } => commands::config::handle_migrate(yes),
        },
        Some(Command::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "garden", &mut std::io::stdout());
            Ok(())
        }
    }
}
