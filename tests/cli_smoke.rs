#![allow(clippy::unwrap_used)]
//! CLI smoke tests: the binary starts, parses its options and fails with the
//! right exit codes, without ever reaching the real translation service.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Runs `trans` against an isolated config directory.
#[allow(deprecated)]
fn trans(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("trans").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn write_config(config_home: &TempDir, contents: &str) {
    let dir = config_home.path().join("trans");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), contents).unwrap();
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    trans(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CLI translator"))
        .stdout(predicate::str::contains("translate"))
        .stdout(predicate::str::contains("languages"))
        .stdout(predicate::str::contains("configure"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    trans(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand_prints_welcome() {
    let home = TempDir::new().unwrap();
    trans(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the CLI Translator!"));
}

#[test]
fn test_translate_help() {
    let home = TempDir::new().unwrap();
    trans(&home)
        .args(["translate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--from"))
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("--text"))
        .stdout(predicate::str::contains("--file"));
}

#[test]
fn test_languages_list() {
    let home = TempDir::new().unwrap();
    trans(&home)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("en"))
        .stdout(predicate::str::contains("Russian"))
        .stdout(predicate::str::contains("ja"))
        .stdout(predicate::str::contains("zh-CN"));
}

#[test]
fn test_translate_without_text_is_invalid_input() {
    let home = TempDir::new().unwrap();
    trans(&home)
        .arg("translate")
        .assert()
        .code(exitcode::DATAERR)
        .stderr(predicate::str::contains("empty text provided for translation"));
}

#[test]
fn test_translate_empty_stdin_is_invalid_input() {
    let home = TempDir::new().unwrap();
    trans(&home)
        .args(["translate", "--file", "-"])
        .write_stdin("\n")
        .assert()
        .code(exitcode::DATAERR);
}

#[test]
fn test_text_and_file_conflict() {
    let home = TempDir::new().unwrap();
    trans(&home)
        .args(["translate", "--text", "hello", "--file", "notes.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_translate_missing_file() {
    let home = TempDir::new().unwrap();
    trans(&home)
        .args(["translate", "--file", "/nonexistent/notes.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to access file"));
}

#[test]
fn test_malformed_config_is_config_error() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[trans\nto = ");

    trans(&home)
        .args(["translate", "--text", "hello"])
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_zero_timeout_is_config_error() {
    let home = TempDir::new().unwrap();
    trans(&home)
        .args(["translate", "--text", "hello", "--timeout", "0"])
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("Invalid timeout"));
}

#[test]
fn test_unreachable_endpoint_is_network_error() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        "[trans]\nendpoint = \"http://127.0.0.1:9/translate_a/single\"\n",
    );

    trans(&home)
        .args(["--quiet", "translate", "--text", "hello", "--timeout", "5"])
        .assert()
        .code(exitcode::UNAVAILABLE)
        .stderr(predicate::str::contains("request to http://127.0.0.1:9/"));
}

#[test]
fn test_configure_show_defaults() {
    let home = TempDir::new().unwrap();
    trans(&home)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("en (English)"))
        .stdout(predicate::str::contains("ru (Russian)"))
        .stdout(predicate::str::contains("10s"))
        .stdout(predicate::str::contains("not created yet"));
}

#[test]
fn test_configure_show_reads_config_file() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[trans]\nfrom = \"de\"\nto = \"ja\"\ntimeout_secs = 25\n");

    trans(&home)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("de (German)"))
        .stdout(predicate::str::contains("ja (Japanese)"))
        .stdout(predicate::str::contains("25s"))
        .stdout(predicate::str::contains("not created yet").not());
}
