// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use crate::config::loader::ConfigLoader;
use clap::Parser;
use std::path::Path;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["pods", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
    assert_eq!(cli.global.repository, Path::new("."));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "pods",
        "-C",
        "/tmp/app",
        "-l",
        "5",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "list",
    ])
    .unwrap();

    assert!(matches!(cli.command, Some(Command::List)));
    assert_eq!(cli.global.repository, Path::new("/tmp/app"));
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.configs.len(), 2);
}

#[test]
fn test_global_options_after_subcommand() {
    let cli = Cli::try_parse_from(["pods", "generate", "-C", "proj"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Generate)));
    assert_eq!(cli.global.repository, Path::new("proj"));
}

#[test]
fn test_parse_install() {
    let cli = Cli::try_parse_from([
        "pods",
        "install",
        "qtjson",
        "qtcsv",
        "--source",
        "https://example.com/pods.json",
    ])
    .unwrap();

    let Some(Command::Install(args)) = cli.command else {
        panic!("expected install");
    };
    assert_eq!(args.names, ["qtjson", "qtcsv"]);
    assert_eq!(args.sources, ["https://example.com/pods.json"]);
    assert!(args.url.is_none());
}

#[test]
fn test_parse_install_with_url() {
    let cli = Cli::try_parse_from([
        "pods",
        "install",
        "--url",
        "https://example.com/qtjson.git",
        "qtjson",
    ])
    .unwrap();

    let Some(Command::Install(args)) = cli.command else {
        panic!("expected install");
    };
    assert_eq!(args.url.as_deref(), Some("https://example.com/qtjson.git"));
    assert_eq!(args.names, ["qtjson"]);
}

#[test]
fn test_install_and_remove_require_names() {
    assert!(Cli::try_parse_from(["pods", "install"]).is_err());
    assert!(Cli::try_parse_from(["pods", "remove"]).is_err());
}

#[test]
fn test_update_without_names() {
    let cli = Cli::try_parse_from(["pods", "update"]).unwrap();
    let Some(Command::Update(args)) = cli.command else {
        panic!("expected update");
    };
    assert!(args.names.is_empty());
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["pods", "-l", "7", "list"]).is_err());
}

#[test]
fn test_file_log_level_falls_back_to_log_level() {
    let cli = Cli::try_parse_from(["pods", "-l", "4", "--log-file", "pods.log", "list"]).unwrap();
    let config = cli
        .global
        .apply_overrides(ConfigLoader::new())
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.global.output_log_level.as_u8(), 4);
    assert_eq!(config.global.file_log_level.as_u8(), 4);
    assert_eq!(config.global.log_file.as_deref(), Some(Path::new("pods.log")));
}

#[test]
fn test_overrides_leave_defaults_alone() {
    let cli = Cli::try_parse_from(["pods", "list"]).unwrap();
    let config = cli
        .global
        .apply_overrides(ConfigLoader::new())
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.global.output_log_level.as_u8(), 3);
    assert_eq!(config.global.file_log_level.as_u8(), 5);
}
