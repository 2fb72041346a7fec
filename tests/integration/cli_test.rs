//! End-to-end tests for the garden binary

use assert_cmd::Command;
use predicates::prelude::*;

use garden::achievements::SNAPSHOT_FILE;

/// A garden command with config and data redirected into a tempdir.
fn garden_cmd(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("garden").unwrap();
    cmd.env("GARDEN_DATA_DIR", dir.path())
        .env("GARDEN_CONFIG_DIR", dir.path());
    cmd
}

#[test]
fn exec_help_lists_commands() {
    let dir = tempfile::tempdir().unwrap();
    garden_cmd(&dir)
        .args(["exec", "help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available commands:"))
        .stdout(predicate::str::contains("pwd - Print working directory"));
}

#[test]
fn exec_unknown_command_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    garden_cmd(&dir)
        .args(["exec", "foobar"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Command not found: foobar. Type 'help' for available commands.",
        ));
}

#[test]
fn exec_clear_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    garden_cmd(&dir)
        .args(["exec", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn exec_does_not_create_achievement_state() {
    let dir = tempfile::tempdir().unwrap();
    garden_cmd(&dir).args(["exec", "whoami"]).assert().success();
    assert!(!dir.path().join(SNAPSHOT_FILE).exists());
}

#[test]
fn achievements_list_starts_all_locked() {
    let dir = tempfile::tempdir().unwrap();
    garden_cmd(&dir)
        .arg("achievements")
        .assert()
        .success()
        .stdout(predicate::str::contains("konami"))
        .stdout(predicate::str::contains("garden_keeper"))
        .stdout(predicate::str::contains("0/5 unlocked"));
}

#[test]
fn achievements_list_reflects_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(SNAPSHOT_FILE), r#"{"explorer": true}"#).unwrap();
    garden_cmd(&dir)
        .arg("achievements")
        .assert()
        .success()
        .stdout(predicate::str::contains("1/5 unlocked"));
}

#[test]
fn reset_without_tty_or_yes_declines() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(SNAPSHOT_FILE), r#"{"explorer": true}"#).unwrap();
    garden_cmd(&dir)
        .args(["achievements", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Achievements left unchanged."));
    assert!(dir.path().join(SNAPSHOT_FILE).exists());
}

#[test]
fn reset_with_yes_deletes_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(SNAPSHOT_FILE), r#"{"explorer": true}"#).unwrap();
    garden_cmd(&dir)
        .args(["achievements", "reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Achievements reset!"));
    assert!(!dir.path().join(SNAPSHOT_FILE).exists());
}

#[test]
fn config_path_honors_env_override() {
    let dir = tempfile::tempdir().unwrap();
    garden_cmd(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(dir.path().to_str().unwrap()));
}

#[test]
fn config_show_prints_default_sections() {
    let dir = tempfile::tempdir().unwrap();
    garden_cmd(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[notifications]"))
        .stdout(predicate::str::contains("[profile]"))
        .stdout(predicate::str::contains("[ui]"));
}

#[test]
fn config_migrate_yes_creates_full_config() {
    let dir = tempfile::tempdir().unwrap();
    garden_cmd(&dir)
        .args(["config", "migrate", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config updated successfully."));
    let content = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(content.contains("toast_secs"));
    assert!(content.contains("base_url"));
}

#[test]
fn config_migrate_keeps_user_values() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[ui]\ntoast_secs = 9\n").unwrap();
    garden_cmd(&dir)
        .args(["config", "migrate", "--yes"])
        .assert()
        .success();
    let content = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(content.contains("toast_secs = 9"));
    assert!(content.contains("tick_ms"));
}
