// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

//! End-to-end tests for the `commitpad` binary.

mod helpers;

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use helpers::GIT_COMMENTS;
use predicates::prelude::*;
use tempfile::TempDir;

// ─── Test helpers ────────────────────────────────────────────────────────────

/// Binary isolated from the user's config and session
fn commitpad(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("commitpad").unwrap();
    cmd.current_dir(dir)
        .env("COMMITPAD_SESSION_FILE", dir.join("last_message"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn setup() -> TempDir {
    tempfile::tempdir().unwrap()
}

// ─── Usage ───────────────────────────────────────────────────────────────────

#[test]
fn missing_argument_is_a_usage_error() {
    let dir = setup();
    commitpad(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Expecting the commit message file as argument",
        ));
    assert!(!dir.path().join("last_message").exists());
}

#[test]
fn extra_arguments_are_rejected() {
    let dir = setup();
    commitpad(dir.path())
        .args(["one", "two"])
        .assert()
        .failure();
    assert!(!dir.path().join("one").exists());
}

#[test]
fn refuses_to_prompt_without_a_terminal() {
    let dir = setup();
    fs::write(dir.path().join("MSG"), "Title\n").unwrap();

    commitpad(dir.path())
        .arg("MSG")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a terminal"));
    assert_eq!(fs::read_to_string(dir.path().join("MSG")).unwrap(), "Title\n");
}

// ─── Batch formatting ────────────────────────────────────────────────────────

#[test]
fn format_rewrites_message_in_place() {
    let dir = setup();
    let path = dir.path().join("COMMIT_EDITMSG");
    fs::write(
        &path,
        format!(
            "fix the parser.\n\n{}\n{GIT_COMMENTS}",
            "word ".repeat(20).trim_end()
        ),
    )
    .unwrap();

    commitpad(dir.path())
        .args(["--format", "COMMIT_EDITMSG"])
        .assert()
        .success();

    let expected = format!(
        "Fix the parser\r\n\r\n{}\r\n{}",
        vec!["word"; 14].join(" "),
        vec!["word"; 6].join(" ")
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn format_honours_max_width_flag() {
    let dir = setup();
    let path = dir.path().join("MSG");
    fs::write(&path, "Title\n\nthe quick brown fox jumps over the lazy dog\n").unwrap();

    commitpad(dir.path())
        .args(["--format", "--max-width", "20", "MSG"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Title\r\n\r\nthe quick brown fox\r\njumps over the lazy\r\ndog"
    );
}

#[test]
fn format_refuses_comment_lines_without_yes() {
    let dir = setup();
    let path = dir.path().join("MSG");
    fs::write(&path, "").unwrap();
    fs::write(dir.path().join("last_message"), "Title\0#hashtag body").unwrap();

    commitpad(dir.path())
        .args(["--format", "MSG"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("comment marker"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "");

    commitpad(dir.path())
        .args(["--format", "--yes", "MSG"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Title\r\n\r\n#hashtag body"
    );
}

#[test]
fn format_fails_when_message_cannot_be_written() {
    let dir = setup();
    // Both reading and writing a directory fail; the restored title is what gets committed
    fs::create_dir(dir.path().join("MSG")).unwrap();
    fs::write(dir.path().join("last_message"), "Restored title\0").unwrap();

    commitpad(dir.path())
        .args(["--format", "MSG"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read commit message"))
        .stderr(predicate::str::contains("Failed to save commit message"));
}

#[test]
fn no_session_leaves_no_snapshot() {
    let dir = setup();
    fs::write(dir.path().join("MSG"), "Title\n").unwrap();

    commitpad(dir.path())
        .args(["--format", "--no-session", "MSG"])
        .assert()
        .success();
    assert!(!dir.path().join("last_message").exists());
}

#[test]
fn project_config_is_picked_up() {
    let dir = setup();
    fs::write(dir.path().join(".commitpad.toml"), "max_width = 20\n").unwrap();
    fs::write(
        dir.path().join("MSG"),
        "Title\n\nthe quick brown fox jumps over the lazy dog\n",
    )
    .unwrap();

    commitpad(dir.path())
        .args(["--format", "MSG"])
        .assert()
        .success();

    let written = fs::read_to_string(dir.path().join("MSG")).unwrap();
    assert!(written.ends_with("jumps over the lazy\r\ndog"));
}

// ─── Subcommands ─────────────────────────────────────────────────────────────

#[test]
fn file_named_like_a_subcommand_is_opened_as_a_path() {
    let dir = setup();
    let path = dir.path().join("init");
    fs::write(&path, "fix the parser.\n").unwrap();

    commitpad(dir.path())
        .args(["--format", "./init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config").not());
    assert_eq!(fs::read_to_string(&path).unwrap(), "Fix the parser");
}

#[test]
fn config_command_shows_env_overrides() {
    let dir = setup();
    commitpad(dir.path())
        .arg("config")
        .env("COMMITPAD_MAX_WIDTH", "80")
        .assert()
        .success()
        .stdout(predicate::str::contains("Max width: 80"))
        .stdout(predicate::str::contains("Default marker: #"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = setup();
    commitpad(dir.path())
        .arg("config")
        .env("COMMITPAD_MAX_WIDTH", "3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_width"));
}

#[test]
fn completions_are_generated() {
    let dir = setup();
    commitpad(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("commitpad"));
}
