//! CLI integration tests

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn clipart_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_clipart"))
}

/// Binary with config isolated in a fresh directory
fn isolated() -> (Command, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut cmd = clipart_bin();
    cmd.env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path())
        .env_remove("CLIPART_POLL_INTERVAL")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    (cmd, dir)
}

#[test]
fn help_output() {
    let output = clipart_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Clipboard history"));
    assert!(stdout.contains("--poll-interval"));
    assert!(stdout.contains("--toggle"));
    assert!(stdout.contains("--content-protection"));
    assert!(stdout.contains("--no-hotkeys"));
    assert!(stdout.contains("--no-show-on-copy"));
    assert!(stdout.contains("--clipboard-backend"));
}

#[test]
fn version_output() {
    let output = clipart_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("clipart"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_help() {
    clipart_bin()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("set"))
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("list"))
                .and(predicate::str::contains("path")),
        );
}

#[test]
fn config_path_command() {
    let (mut cmd, dir) = isolated();
    let expected = dir.path().join("clipart").join("config.toml");

    cmd.args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_string_lossy().as_ref()));
}

#[test]
fn config_init_then_list() {
    let (mut cmd, dir) = isolated();
    cmd.args(["config", "init"]).assert().success();
    assert!(dir.path().join("clipart").join("config.toml").exists());

    let (mut list, _) = isolated();
    list.env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("poll_interval: 250ms")
                .and(predicate::str::contains("history_limit: 50"))
                .and(predicate::str::contains("Control+Alt+F12")),
        );
}

#[test]
fn config_init_twice_fails() {
    let (mut first, dir) = isolated();
    first.args(["config", "init"]).assert().success();

    let (mut second, _) = isolated();
    second
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_set_and_get() {
    let (mut set, dir) = isolated();
    set.args(["config", "set", "toggle_candidates", "ctrl+alt+v"])
        .assert()
        .success();

    let (mut get, _) = isolated();
    get.env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "get", "toggle_candidates"])
        .assert()
        .success()
        .stdout("Control+Alt+V\n");
}

#[test]
fn config_get_unset_key() {
    let (mut cmd, _dir) = isolated();
    cmd.args(["config", "get", "show_on_copy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn invalid_clipboard_backend_arg() {
    let output = clipart_bin()
        .args(["--clipboard-backend", "xclip"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid value") || stderr.contains("possible values"),
        "Expected clap value error, got: {}",
        stderr
    );
}

// Valid invocations start the long-running service, so only rejected
// arguments are exercised here.
