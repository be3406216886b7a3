// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the CLI.
//!
//! Parses realistic argument patterns and runs the `pods` binary against
//! scratch repositories.

use clap::Parser;
use pods_rs::cli::pods::InstallArgs;
use pods_rs::cli::{Cli, Command};
use std::path::Path;
use std::process::{Command as Process, Output};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Run the `pods` binary in `cwd` with a clean `PODS_*` environment.
fn pods(args: &[&str], cwd: &Path) -> Output {
    let mut command = Process::new(env!("CARGO_BIN_EXE_pods"));
    command.args(args).current_dir(cwd);
    for (key, _) in std::env::vars() {
        if key.starts_with("PODS_") {
            command.env_remove(key);
        }
    }
    command.output().expect("failed to run pods")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["pods"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_install_multiple_sources() {
    let cli = Cli::try_parse_from([
        "pods",
        "install",
        "--source",
        "https://a.example/pods.json",
        "--source",
        "https://b.example/pods.json",
        "qtjson",
    ])
    .unwrap();

    let Some(Command::Install(InstallArgs { sources, names, .. })) = cli.command else {
        panic!("expected install");
    };
    assert_eq!(sources.len(), 2);
    assert_eq!(names, ["qtjson"]);
}

#[test]
fn cli_config_files_command_name() {
    let cli = Cli::try_parse_from(["pods", "config-files"]).unwrap();
    assert!(matches!(cli.command, Some(Command::ConfigFiles)));
}

#[test]
fn cli_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["pods", "build"]).is_err());
}

// =============================================================================
// Binary
// =============================================================================

#[test]
fn bin_version() {
    let temp = temp_dir();
    let output = pods(&["version"], temp.path());
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn bin_init_then_list() {
    let temp = temp_dir();
    let repo = temp.path().join("app");

    let output = pods(&["-C", repo.to_str().unwrap(), "init"], temp.path());
    assert!(output.status.success(), "{output:?}");
    assert!(repo.join("app.pro").exists());
    assert!(repo.join("pods.pri").exists());

    let output = pods(&["list", "-C", "app"], temp.path());
    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout(&output).trim(), "No pods installed");

    let output = pods(&["check"], &repo);
    assert!(output.status.success(), "{output:?}");
}

#[test]
fn bin_generate_outside_repository_fails() {
    let temp = temp_dir();
    let output = pods(&["generate"], temp.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a git repository"), "{stderr}");
    assert!(!temp.path().join("pods.pri").exists());
}

#[test]
fn bin_options_reads_config_file_and_env() {
    let temp = temp_dir();
    std::fs::write(
        temp.path().join("pods.toml"),
        "[git]\nupdate_branch = \"develop\"\n",
    )
    .unwrap();

    let output = Process::new(env!("CARGO_BIN_EXE_pods"))
        .arg("options")
        .current_dir(temp.path())
        .env("PODS_INDEX__SOURCES", "https://a.example/pods.json,https://b.example/pods.json")
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let text = stdout(&output);
    assert!(text.contains("= develop"), "{text}");
    assert!(
        text.contains("= https://a.example/pods.json, https://b.example/pods.json"),
        "{text}"
    );
}

#[test]
fn bin_config_files_lists_default_file() {
    let temp = temp_dir();
    let output = pods(&["config-files"], temp.path());
    assert_eq!(stdout(&output).trim(), "No configuration files loaded");

    std::fs::write(temp.path().join("pods.toml"), "").unwrap();
    let output = pods(&["config-files"], temp.path());
    assert!(stdout(&output).contains("pods.toml"));
}

#[test]
fn bin_install_without_sources_fails() {
    let temp = temp_dir();
    let output = pods(&["init"], temp.path());
    assert!(output.status.success(), "{output:?}");

    let output = pods(&["install", "qtjson"], temp.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(!temp.path().join("qtjson").exists());
}

#[test]
fn bin_invalid_config_fails() {
    let temp = temp_dir();
    std::fs::write(temp.path().join("pods.toml"), "[index]\ntimeout_secs = 0\n").unwrap();

    let output = pods(&["list"], temp.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load config"));
}

#[test]
fn bin_available_without_git() {
    let temp = temp_dir();
    let output = Process::new(env!("CARGO_BIN_EXE_pods"))
        .arg("available")
        .current_dir(temp.path())
        .env("PODS_GIT__PROGRAM", "definitely-not-git")
        .env_remove("PODS_INDEX__SOURCES")
        .output()
        .unwrap();

    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout(&output).trim(), "No pods available");
}
