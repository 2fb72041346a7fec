//! TOML configuration.
//!
//! Loaded from the platform config directory (override with
//! `GARDEN_CONFIG_DIR`). Every field has a default, so a missing file or a
//! partial file both work; `migrate_config` appends missing fields to an
//! existing file while preserving the user's formatting and comments.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::DocumentMut;

/// Environment override for the config directory (used by tests and scripts).
pub const CONFIG_DIR_ENV: &str = "GARDEN_CONFIG_DIR";

const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub notifications: Notifications,
    pub profile: Profile,
    pub ui: Ui,
}

/// Outbound unlock-notification settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notifications {
    /// Send a POST per unlock (failures are logged and dropped)
    pub enabled: bool,
    /// Base URL of the notification endpoint
    pub base_url: String,
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

/// Texts served by the console commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// `about` response
    pub about: String,
    /// `skills` response
    pub skills: String,
    /// `projects` response
    pub projects: String,
    /// `whoami` response
    pub whoami: String,
    /// `ls` response
    pub listing: String,
    /// `pwd` response
    pub working_dir: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            about: "I am a CS student passionate about creating digital solutions \
                    and exploring new technologies."
                .to_string(),
            skills: "Python, JavaScript, Java, C++, React, Node.js, Flask, Git, and more!"
                .to_string(),
            projects: "AI Chatbot, E-commerce Platform, Fitness Tracker, and various \
                       open-source contributions."
                .to_string(),
            whoami: "garden@digital:~$ CS Student & Developer".to_string(),
            listing: "about/  skills/  projects/  experience/  contact/  README.md".to_string(),
            working_dir: "/home/garden/digital-portfolio".to_string(),
        }
    }
}

/// Presentation knobs for the full-screen interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ui {
    /// Seconds a toast stays on screen
    pub toast_secs: u64,
    /// Show the welcome toast shortly after startup
    pub welcome_toast: bool,
    /// Event-loop tick in milliseconds
    pub tick_ms: u64,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            toast_secs: 3,
            welcome_toast: true,
            tick_ms: 100,
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir).join(CONFIG_FILE));
            }
        }
        let base = dirs::config_dir().context("no config directory available")?;
        Ok(base.join("digital-garden").join(CONFIG_FILE))
    }

    /// Load the config file, defaulting when it does not exist.
    pub fn load() -> Result<Config> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config in {}", path.display()))
    }

    /// Write the config file, creating its directory as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let toml_str = toml::to_string_pretty(self).context("failed to encode config")?;
        fs::write(&path, toml_str).with_context(|| format!("failed to write {}", path.display()))
    }
}

/// Outcome of a config migration.
#[derive(Debug, Clone)]
pub struct MigrateResult {
    /// Full migrated file content
    pub content: String,
    /// `section.key` of every field that was added
    pub added_fields: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add fields missing from `content` using current defaults.
///
/// Existing values, formatting, and comments are preserved; only absent
/// keys are appended to their sections (sections are created as needed).
pub fn migrate_config(content: &str) -> Result<MigrateResult> {
    let mut doc: DocumentMut = content.parse().context("config file is not valid TOML")?;
    let defaults = toml::Value::try_from(Config::default()).context("failed to encode defaults")?;

    let mut added_fields = Vec::new();
    if let toml::Value::Table(sections) = defaults {
        for (section, value) in sections {
            let toml::Value::Table(fields) = value else {
                continue;
            };
            for (key, field) in fields {
                let present = doc
                    .get(section.as_str())
                    .and_then(|item| item.as_table())
                    .map(|table| table.contains_key(key.as_str()))
                    .unwrap_or(false);
                if present {
                    continue;
                }
                doc[section.as_str()][key.as_str()] = default_item(&field);
                added_fields.push(format!("{section}.{key}"));
            }
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
    })
}

fn default_item(value: &toml::Value) -> toml_edit::Item {
    match value {
        toml::Value::String(s) => toml_edit::value(s.clone()),
        toml::Value::Integer(i) => toml_edit::value(*i),
        toml::Value::Float(f) => toml_edit::value(*f),
        toml::Value::Boolean(b) => toml_edit::value(*b),
        other => toml_edit::value(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_matches_console_texts() {
        let profile = Profile::default();
        assert!(profile.about.starts_with("I am a CS student"));
        assert_eq!(profile.working_dir, "/home/garden/digital-portfolio");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config::default();
        let encoded = toml::to_string_pretty(&config).unwrap();
        let decoded: Config = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn partial_config_fills_missing_fields() {
        let config: Config = toml::from_str("[ui]\ntoast_secs = 7\n").unwrap();
        assert_eq!(config.ui.toast_secs, 7);
        assert!(config.ui.welcome_toast);
        assert!(config.notifications.enabled);
    }

    #[test]
    fn migrate_empty_file_adds_everything() {
        let result = migrate_config("").unwrap();
        assert!(result.has_changes());
        assert!(result.added_fields.contains(&"ui.toast_secs".to_string()));
        assert!(result
            .added_fields
            .contains(&"notifications.base_url".to_string()));
        // Migrated content must parse back into the default config
        let config: Config = toml::from_str(&result.content).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn migrate_preserves_existing_values_and_comments() {
        let content = "# my settings\n[ui]\ntoast_secs = 9\n";
        let result = migrate_config(content).unwrap();
        assert!(result.content.contains("# my settings"));
        assert!(result.content.contains("toast_secs = 9"));
        assert!(!result.added_fields.contains(&"ui.toast_secs".to_string()));
        assert!(result.added_fields.contains(&"ui.tick_ms".to_string()));
    }

    #[test]
    fn migrate_complete_file_changes_nothing() {
        let full = toml::to_string_pretty(&Config::default()).unwrap();
        let result = migrate_config(&full).unwrap();
        assert!(!result.has_changes());
    }

    #[test]
    fn migrate_rejects_invalid_toml() {
        assert!(migrate_config("[ui\nbroken").is_err());
    }
}
