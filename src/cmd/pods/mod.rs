// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pod command implementations.
//!
//! ```text
//! init      --> PodManager::create_project
//! install   --> index lookup --> install_pod / install_pods
//! remove    --> remove_pod / remove_pods
//! update    --> update_all_pods (no names) / update_pods
//! check     --> check_pod per name
//! generate  --> generate_qmake_files
//! ```

use std::path::Path;

use crate::cli::pods::{CheckArgs, InstallArgs, RemoveArgs, UpdateArgs};
use crate::config::Config;
use crate::error::{PodOpError, PodResult, Result};
use crate::net::IndexClient;
use crate::pod::Pod;
use crate::pod::index;
use crate::pod::manager::PodManager;
use anyhow::bail;
use tracing::info;

/// Configured index sources followed by `extra`, without duplicates.
#[must_use]
pub fn merge_sources(configured: &[String], extra: &[String]) -> Vec<String> {
    let mut sources: Vec<String> = Vec::with_capacity(configured.len() + extra.len());
    for source in configured.iter().chain(extra) {
        if !sources.contains(source) {
            sources.push(source.clone());
        }
    }
    sources
}

/// Look up every name in `available`, first match wins.
///
/// # Errors
///
/// Returns a `PodOpError::UnknownPod` for the first name no source offers.
pub fn resolve_pods(names: &[String], available: &[Pod]) -> PodResult<Vec<Pod>> {
    names
        .iter()
        .map(|name| {
            index::find(available, name).cloned().ok_or_else(|| {
                PodOpError::UnknownPod {
                    name: name.clone(),
                }
                .into()
            })
        })
        .collect()
}

/// Handler for the `init` command.
///
/// # Errors
///
/// Returns an error if git is missing or project creation fails.
pub fn run_init_command(config: &Config, repo: &Path) -> Result<()> {
    let manager = PodManager::from_config(config)?;
    manager.create_project(repo)?;
    println!("Initialized pods project in {}", repo.display());
    Ok(())
}

/// Handler for the `install` command.
///
/// # Errors
///
/// Returns an error if a pod cannot be resolved or any install step fails.
pub async fn run_install_command(args: &InstallArgs, config: &Config, repo: &Path) -> Result<()> {
    let manager = PodManager::from_config(config)?;

    let pods = if let Some(url) = &args.url {
        let [name] = args.names.as_slice() else {
            eprintln!("--url installs exactly one pod");
            bail!("expected one pod name with --url, got {}", args.names.len());
        };
        vec![Pod::new(name.as_str(), url.as_str())]
    } else {
        let sources = merge_sources(&config.index.sources, &args.sources);
        if sources.is_empty() {
            eprintln!("No index sources configured (use --source or [index] sources)");
            bail!("no index sources");
        }
        let client = IndexClient::from_config(&config.index);
        let available = manager.list_available_pods(&client, &sources).await;
        resolve_pods(&args.names, &available)?
    };

    match pods.as_slice() {
        [pod] => manager.install_pod(repo, pod)?,
        _ => manager.install_pods(repo, &pods)?,
    }

    for pod in &pods {
        println!("Installed {} ({})", pod.name, pod.url);
    }
    Ok(())
}

/// Handler for the `remove` command.
///
/// # Errors
///
/// Returns an error if any removal step fails.
pub fn run_remove_command(args: &RemoveArgs, config: &Config, repo: &Path) -> Result<()> {
    let manager = PodManager::from_config(config)?;
    match args.names.as_slice() {
        [name] => manager.remove_pod(repo, name)?,
        names => manager.remove_pods(repo, names)?,
    }
    for name in &args.names {
        println!("Removed {name}");
    }
    Ok(())
}

/// Handler for the `update` command.
///
/// # Errors
///
/// Returns an error if any pod fails to update.
pub fn run_update_command(args: &UpdateArgs, config: &Config, repo: &Path) -> Result<()> {
    let manager = PodManager::from_config(config)?;
    if args.names.is_empty() {
        info!("updating all pods");
        manager.update_all_pods(repo)?;
        println!("Updated all pods");
    } else {
        manager.update_pods(repo, &args.names)?;
        for name in &args.names {
            println!("Updated {name}");
        }
    }
    Ok(())
}

/// Handler for the `check` command.
///
/// Prints `<name>: ok` or `<name>: invalid` per pod.
///
/// # Errors
///
/// Returns an error if the installed pods cannot be listed or any pod is invalid.
pub fn run_check_command(args: &CheckArgs, config: &Config, repo: &Path) -> Result<()> {
    let manager = PodManager::from_config(config)?;
    let names = if args.names.is_empty() {
        manager
            .list_installed_pods(repo)?
            .into_iter()
            .map(|pod| pod.name)
            .collect()
    } else {
        args.names.clone()
    };

    let mut invalid = 0usize;
    for name in &names {
        if manager.check_pod(repo, name) {
            println!("{name}: ok");
        } else {
            println!("{name}: invalid");
            invalid += 1;
        }
    }

    if invalid > 0 {
        bail!("{invalid} of {} pods failed the layout check", names.len());
    }
    Ok(())
}

/// Handler for the `generate` command.
///
/// # Errors
///
/// Returns an error if the repository is invalid or a file cannot be written or staged.
pub fn run_generate_command(config: &Config, repo: &Path) -> Result<()> {
    let manager = PodManager::from_config(config)?;
    manager.generate_qmake_files(repo)?;
    println!("Generated qmake files in {}", repo.display());
    Ok(())
}
