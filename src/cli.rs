//! Command-line interface definition.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Digital Garden - an interactive portfolio for the terminal
#[derive(Debug, Parser)]
#[command(name = "garden", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one console command without the full-screen interface
    Exec {
        /// The command line to execute (e.g. `help`)
        #[arg(required = true, trailing_var_arg = true)]
        command: Vec<String>,
    },

    /// Show or reset achievements
    Achievements {
        #[command(subcommand)]
        action: Option<AchievementsAction>,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum AchievementsAction {
    /// Reset every achievement and delete the snapshot
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Open the config file in $EDITOR
    Edit,
    /// Add missing fields to the config file
    Migrate {
        /// Apply changes without confirmation
        #[arg(long)]
        yes: bool,
    },
}
