// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementations for pods-rs.

use std::fmt::Write as _;
use std::path::Path;

use crate::cli::pods::AvailableArgs;
use crate::cmd::pods::merge_sources;
use crate::config::Config;
use crate::error::Result;
use crate::net::IndexClient;
use crate::pod::manager::PodManager;
use crate::pod::{Pod, index};

const HEADERS: [&str; 5] = ["NAME", "LICENSE", "AUTHOR", "URL", "DESCRIPTION"];

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

/// Format pods as a table with aligned columns.
///
/// The last column is not padded.
#[must_use]
pub fn format_pod_table(pods: &[Pod]) -> Vec<String> {
    let rows: Vec<[&str; 5]> = pods
        .iter()
        .map(|pod| {
            [
                pod.name.as_str(),
                or_dash(&pod.license),
                or_dash(&pod.author),
                or_dash(&pod.url),
                or_dash(&pod.description),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    std::iter::once(HEADERS)
        .chain(rows)
        .map(|row| {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                if i + 1 == row.len() {
                    line.push_str(cell);
                } else {
                    let _ = write!(line, "{cell:<width$}  ", width = widths[i]);
                }
            }
            line.trim_end().to_string()
        })
        .collect()
}

/// Handler for the `list` command.
///
/// # Errors
///
/// Returns an error if git is missing or the manifests cannot be parsed.
pub fn run_list_command(config: &Config, repo: &Path) -> Result<()> {
    let manager = PodManager::from_config(config)?;
    let pods = manager.list_installed_pods(repo)?;

    if pods.is_empty() {
        println!("No pods installed");
    } else {
        for line in format_pod_table(&pods) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Handler for the `available` command.
///
/// Sources that cannot be fetched or parsed are skipped with a warning.
/// Git is not resolved, so this works without a git executable.
///
/// # Errors
///
/// Never fails; unreachable sources only produce warnings.
pub async fn run_available_command(args: &AvailableArgs, config: &Config) -> Result<()> {
    let sources = merge_sources(&config.index.sources, &args.sources);
    let client = IndexClient::from_config(&config.index);
    let pods = index::list_available(&client, &sources).await;

    if pods.is_empty() {
        println!("No pods available");
    } else {
        for line in format_pod_table(&pods) {
            println!("{line}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
