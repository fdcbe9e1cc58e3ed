//! Integration tests for the nd CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn nd() -> Command {
    let mut cmd = Command::cargo_bin("nd").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Write a preset book to a temp directory and return the directory.
fn preset_file(json: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("presets.json"), json).unwrap();
    dir
}

// -- roll --

#[test]
fn roll_prints_table_and_result() {
    nd()
        .args(["roll", "--ability", "2", "--difficulty", "1", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ability"))
        .stdout(predicate::str::contains("Difficulty"))
        .stdout(predicate::str::contains("Result:"));
}

#[test]
fn roll_is_reproducible_with_seed() {
    let run = || {
        nd()
            .args(["roll", "-p", "3", "-c", "2", "--seed", "99"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn roll_with_no_dice() {
    nd()
        .arg("roll")
        .assert()
        .success()
        .stdout(predicate::str::contains("No dice to roll"));
}

#[test]
fn roll_with_preset_number() {
    nd()
        .args(["roll", "--preset", "1", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result:"));
}

#[test]
fn roll_unknown_preset_fails() {
    nd()
        .args(["roll", "--preset", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no preset named 'nope'"));
}

#[test]
fn roll_rejects_negative_count() {
    nd().args(["roll", "--boost", "-1"]).assert().failure();
}

// -- force --

#[test]
fn force_rolls_requested_dice() {
    nd()
        .args(["force", "3", "--seed", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Force x3"))
        .stdout(predicate::str::contains("Light,"));
}

#[test]
fn force_rejects_oversized_count() {
    nd()
        .args(["force", "4000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid dice count: 4000000000"));
}

// -- injury --

#[test]
fn injury_value_lookup() {
    nd()
        .args(["injury", "--value", "126"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gruesome Injury"))
        .stdout(predicate::str::contains("Daunting"));
}

#[test]
fn injury_value_below_table() {
    nd()
        .args(["injury", "--value", "-40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Minor Nick"));
}

#[test]
fn injury_fatal_value() {
    nd()
        .args(["injury", "--value", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dead"))
        .stdout(predicate::str::contains("Fatal"));
}

#[test]
fn injury_roll_with_modifiers() {
    nd()
        .args(["injury", "--previous", "2", "--modifier", "-10", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+ 20 previous -10"))
        .stdout(predicate::str::contains("Injury:"));
}

#[test]
fn injury_value_conflicts_with_previous() {
    nd()
        .args(["injury", "--value", "50", "--previous", "1"])
        .assert()
        .failure();
}

// -- presets --

#[test]
fn presets_lists_builtin_book() {
    nd()
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("34 presets"));
}

#[test]
fn presets_from_file() {
    let dir = preset_file(
        r#"{"presets":[{"name":"Stealth","counts":{"ability":2,"difficulty":1}}]}"#,
    );
    nd()
        .args(["presets", "--presets"])
        .arg(dir.path().join("presets.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Stealth"))
        .stdout(predicate::str::contains("1 presets"));
}

#[test]
fn presets_invalid_file_fails() {
    let dir = preset_file(r#"{"presets":[{"name":"A","counts":{}},{"name":"a","counts":{}}]}"#);
    nd()
        .args(["presets", "--presets"])
        .arg(dir.path().join("presets.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load presets"));
}

#[test]
fn presets_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    nd()
        .args(["presets", "--presets"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// -- table --

#[test]
fn table_session_adds_and_quits() {
    nd()
        .args(["table", "--seed", "42"])
        .write_stdin("add 2 ability\nadd 1 difficulty\npool\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 Ability:"))
        .stdout(predicate::str::contains("1 Difficulty:"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn table_session_history_and_export() {
    nd()
        .args(["table", "--seed", "42"])
        .write_stdin("add 1 boost\nreset\nhistory\nexport text\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved: 1 Boost"))
        .stdout(predicate::str::contains("History (newest first)"))
        .stdout(predicate::str::contains("Pool (1 Boost)"));
}

#[test]
fn table_session_reports_bad_commands_and_continues() {
    nd()
        .args(["table"])
        .write_stdin("fly\nadd 2 force\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command: fly"))
        .stdout(predicate::str::contains("unknown die type: force"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn table_session_ends_on_eof() {
    nd()
        .args(["table", "--history-limit", "5"])
        .write_stdin("add 1 setback\n")
        .assert()
        .success();
}

#[test]
fn table_with_custom_presets() {
    let dir = preset_file(
        r#"{"presets":[{"name":"Slicing","counts":{"proficiency":1,"challenge":1}}]}"#,
    );
    nd()
        .args(["table", "--presets"])
        .arg(dir.path().join("presets.json"))
        .write_stdin("preset slicing\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Slicing."))
        .stdout(predicate::str::contains("1 Proficiency:"));
}

#[test]
fn help_lists_subcommands() {
    nd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("roll"))
        .stdout(predicate::str::contains("injury"))
        .stdout(predicate::str::contains("table"));
}
