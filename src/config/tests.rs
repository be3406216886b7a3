// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.index.sources.is_empty());
    assert_eq!(config.index.timeout_secs, 30);
    assert!(config.index.user_agent.starts_with("pods-rs/"));
    assert_eq!(config.git.program, PathBuf::from("git"));
    assert_eq!(config.git.update_branch, "master");
    assert!(config.git.config.is_empty());
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_full_config() {
    let config = Config::parse(
        r#"
[global]
output_log_level = 4
log_file = "logs/pods.log"

[index]
sources = ["https://a.example/pods.json", "https://b.example/pods.json"]
timeout_secs = 5

[git]
update_branch = "main"
config = ["protocol.file.allow=always"]
"#,
    )
    .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(
        config.global.log_file,
        Some(PathBuf::from("logs/pods.log"))
    );
    assert_eq!(config.index.sources.len(), 2);
    assert_eq!(config.index.timeout_secs, 5);
    assert_eq!(config.git.update_branch, "main");
    assert_eq!(config.git.config, vec!["protocol.file.allow=always"]);
}

#[test]
fn test_partial_sections_keep_defaults() {
    let config = Config::parse("[git]\nupdate_branch = \"develop\"\n").unwrap();
    assert_eq!(config.git.update_branch, "develop");
    assert_eq!(config.git.program, PathBuf::from("git"));
    assert_eq!(config.index.timeout_secs, 30);
}

#[test]
fn test_unknown_key_rejected() {
    let result = Config::parse("[index]\nmirrors = []\n");
    assert!(result.is_err());
}

#[test]
fn test_invalid_log_level_rejected() {
    let result = Config::parse("[global]\noutput_log_level = 9\n");
    assert!(result.is_err());
}

#[test]
fn test_validate_rejects_bad_values() {
    let empty_branch = Config::parse("[git]\nupdate_branch = \"  \"\n");
    let err = empty_branch.unwrap_err().to_string();
    assert!(err.contains("update_branch"), "got: {err}");

    let zero_timeout = Config::parse("[index]\ntimeout_secs = 0\n");
    assert!(zero_timeout.is_err());

    let bad_git_config = Config::parse("[git]\nconfig = [\"core.autocrlf\"]\n");
    let err = bad_git_config.unwrap_err().to_string();
    assert!(err.contains("key=value"), "got: {err}");
}

#[test]
fn test_loader_set_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[git]\nupdate_branch = \"main\"\n")
        .set("git.update_branch", "stable")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.git.update_branch, "stable");
}

#[test]
fn test_loader_tracks_files() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("pods.toml");
    std::fs::write(&file, "[index]\ntimeout_secs = 12\n").unwrap();
    let missing = temp.path().join("missing.toml");

    let loader = ConfigLoader::new()
        .add_toml_file_optional(&missing)
        .add_toml_file(&file);
    let lines = loader.format_loaded_files();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("1. [file] "));

    let config = loader.build().unwrap();
    assert_eq!(config.index.timeout_secs, 12);
}

#[test]
fn test_missing_required_file_errors() {
    let result = Config::from_file("/nonexistent/pods.toml");
    assert!(result.is_err());
}

#[test]
fn test_format_options_sorted_and_aligned() {
    let mut config = Config::default();
    config.index.sources = vec!["https://a.example/pods.json".to_string()];
    let options = config.format_options();

    let keys: Vec<&str> = options
        .iter()
        .map(|line| line.split_whitespace().next().unwrap())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);

    assert!(
        options
            .iter()
            .any(|l| l.starts_with("index.sources") && l.ends_with("= https://a.example/pods.json"))
    );
    let eq_columns: Vec<usize> = options.iter().filter_map(|l| l.find(" = ")).collect();
    assert!(eq_columns.windows(2).all(|w| w[0] == w[1]));
}
