// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pod index sources.
//!
//! ```text
//! {                                      sorted by key
//!   "qtjson": "https://.../qtjson.git",  legacy:  url only
//!   "qtcsv": {                           current: url + metadata
//!     "url": "...", "author": "...",
//!     "description": "...", "license": "..."
//!   }
//! }
//! ```
//!
//! A source that cannot be fetched or parsed is skipped with a warning.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::Pod;
use crate::net::IndexClient;

/// Read one field of a current-format entry; absent or non-string is empty.
fn field(record: &Map<String, Value>, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn entry_to_pod(name: String, value: &Value) -> Pod {
    match value {
        Value::String(url) => Pod::new(name, url.clone()),
        Value::Object(record) => Pod {
            url: field(record, "url"),
            author: field(record, "author"),
            description: field(record, "description"),
            license: field(record, "license"),
            website: field(record, "website"),
            name,
        },
        other => {
            debug!(pod = %name, value = %other, "index entry is neither url nor object");
            Pod::new(name, "")
        }
    }
}

/// Parse one index document.
///
/// A document that is valid JSON but not an object contains no pods.
///
/// # Errors
///
/// Returns the `serde_json` error if the document is not valid JSON.
pub fn parse_index(json: &str) -> serde_json::Result<Vec<Pod>> {
    let document: Value = serde_json::from_str(json)?;
    let Value::Object(entries) = document else {
        return Ok(Vec::new());
    };

    let mut pods: Vec<Pod> = entries
        .into_iter()
        .map(|(name, value)| entry_to_pod(name, &value))
        .collect();
    pods.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(pods)
}

/// Query every source in order and concatenate the pods they offer.
///
/// Duplicates across sources are kept.
pub async fn list_available(client: &IndexClient, sources: &[String]) -> Vec<Pod> {
    let mut pods = Vec::new();

    for source in sources {
        let body = match client.fetch_string(source).await {
            Ok(body) => body,
            Err(e) => {
                warn!(source = %source, error = %e, "skipping index source");
                continue;
            }
        };

        match parse_index(&body) {
            Ok(found) => {
                debug!(source = %source, count = found.len(), "read index source");
                pods.extend(found);
            }
            Err(e) => warn!(source = %source, error = %e, "index source is not valid JSON"),
        }
    }

    pods
}

/// Find a pod by name, first source wins.
#[must_use]
pub fn find<'a>(pods: &'a [Pod], name: &str) -> Option<&'a Pod> {
    pods.iter().find(|pod| pod.name == name)
}

#[cfg(test)]
mod tests;
