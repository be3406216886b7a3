// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{format_pod_table, run_available_command};
use crate::cli::pods::AvailableArgs;
use crate::config::Config;
use crate::pod::Pod;

#[test]
fn test_format_pod_table() {
    let pods = vec![
        Pod {
            author: "Jane Doe".to_string(),
            license: "MIT".to_string(),
            description: "JSON helpers".to_string(),
            ..Pod::new("qtjson", "https://example.com/qtjson.git")
        },
        Pod::new("csv", "https://example.com/csv.git"),
    ];

    insta::assert_snapshot!(format_pod_table(&pods).join("\n"), @r"
    NAME    LICENSE  AUTHOR    URL                             DESCRIPTION
    qtjson  MIT      Jane Doe  https://example.com/qtjson.git  JSON helpers
    csv     -        -         https://example.com/csv.git     -
    ");
}

#[test]
fn test_format_pod_table_header_only() {
    assert_eq!(
        format_pod_table(&[]),
        ["NAME  LICENSE  AUTHOR  URL  DESCRIPTION"]
    );
}

#[tokio::test]
async fn test_available_does_not_need_git() {
    let mut config = Config::default();
    config.git.program = "definitely-not-git".into();

    run_available_command(&AvailableArgs::default(), &config)
        .await
        .unwrap();
}
