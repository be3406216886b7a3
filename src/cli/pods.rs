// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pod command arguments.
//!
//! ```text
//! install NAME...            index lookup in [index] sources + --source
//! install --url URL NAME     no index lookup, exactly one name
//! update                     every installed pod
//! update NAME...             named pods, stop at first failure
//! ```

use clap::Args;

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, Args)]
pub struct InstallArgs {
    /// Clone URL of the pod. Skips the index lookup; requires exactly one name.
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Additional index source, searched after the configured ones.
    /// Can be specified multiple times.
    #[arg(long = "source", value_name = "URL", action = clap::ArgAction::Append)]
    pub sources: Vec<String>,

    /// Pods to install.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

/// Arguments for the `remove` command.
#[derive(Debug, Clone, Default, Args)]
pub struct RemoveArgs {
    /// Pods to remove.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

/// Arguments for the `update` command.
#[derive(Debug, Clone, Default, Args)]
pub struct UpdateArgs {
    /// Pods to update. Updates every installed pod if none are given.
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,
}

/// Arguments for the `available` command.
#[derive(Debug, Clone, Default, Args)]
pub struct AvailableArgs {
    /// Additional index source, searched after the configured ones.
    #[arg(long = "source", value_name = "URL", action = clap::ArgAction::Append)]
    pub sources: Vec<String>,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// Pods to check. Checks every installed pod if none are given.
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,
}
