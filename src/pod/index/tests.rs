// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{find, parse_index};
use crate::pod::Pod;

#[test]
fn test_parse_legacy_format() {
    let pods = parse_index(r#"{"qtjson": "https://example.com/qtjson.git"}"#).unwrap();
    assert_eq!(pods, vec![Pod::new("qtjson", "https://example.com/qtjson.git")]);
}

#[test]
fn test_parse_current_format() {
    let pods = parse_index(
        r#"{
            "qtcsv": {
                "url": "https://example.com/qtcsv.git",
                "author": "Jane Doe",
                "description": "CSV reader",
                "license": "MIT"
            }
        }"#,
    )
    .unwrap();

    assert_eq!(pods.len(), 1);
    let pod = &pods[0];
    assert_eq!(pod.name, "qtcsv");
    assert_eq!(pod.url, "https://example.com/qtcsv.git");
    assert_eq!(pod.author, "Jane Doe");
    assert_eq!(pod.description, "CSV reader");
    assert_eq!(pod.license, "MIT");
    assert!(pod.website.is_empty());
}

#[test]
fn test_parse_mixed_formats_sorted_by_name() {
    let pods = parse_index(
        r#"{
            "zeta": "https://example.com/zeta.git",
            "alpha": {"url": "https://example.com/alpha.git"},
            "mid": {"url": "https://example.com/mid.git", "website": "https://mid.example"}
        }"#,
    )
    .unwrap();

    let names: Vec<&str> = pods.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["alpha", "mid", "zeta"]);
    assert_eq!(pods[1].website, "https://mid.example");
}

#[test]
fn test_parse_current_format_missing_fields_default_empty() {
    let pods = parse_index(r#"{"bare": {}}"#).unwrap();
    assert_eq!(pods, vec![Pod::new("bare", "")]);
}

#[test]
fn test_parse_unrecognized_value_keeps_name() {
    let pods = parse_index(r#"{"odd": 42, "list": [1, 2]}"#).unwrap();
    assert_eq!(pods, vec![Pod::new("list", ""), Pod::new("odd", "")]);
}

#[test]
fn test_parse_current_format_non_string_field_is_empty() {
    let pods = parse_index(
        r#"{"a": {"url": "https://x/a.git", "author": "Jane", "license": null, "website": 5}}"#,
    )
    .unwrap();

    assert_eq!(pods.len(), 1);
    assert_eq!(pods[0].url, "https://x/a.git");
    assert_eq!(pods[0].author, "Jane");
    assert!(pods[0].license.is_empty());
    assert!(pods[0].website.is_empty());
}

#[test]
fn test_parse_array_entry_has_no_url() {
    let pods = parse_index(r#"{"b": ["https://x/b.git"]}"#).unwrap();
    assert_eq!(pods, vec![Pod::new("b", "")]);
}

#[test]
fn test_parse_non_object_document_is_empty() {
    assert!(parse_index(r#"["qtjson"]"#).unwrap().is_empty());
    assert!(parse_index("\"just a string\"").unwrap().is_empty());
}

#[test]
fn test_parse_invalid_json_errors() {
    assert!(parse_index("{not json").is_err());
    assert!(parse_index("").is_err());
}

#[test]
fn test_find_first_match_wins() {
    let pods = vec![
        Pod::new("qtjson", "first"),
        Pod::new("qtcsv", "csv"),
        Pod::new("qtjson", "second"),
    ];
    assert_eq!(find(&pods, "qtjson").map(|p| p.url.as_str()), Some("first"));
    assert!(find(&pods, "missing").is_none());
}
