// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for pods-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! pods [global options] <command>
//! version | options | config-files
//! init
//! install <NAME>... [--url URL] [--source URL]...
//! remove <NAME>...
//! update [NAME]...
//! list
//! available [--source URL]...
//! check [NAME]...
//! generate
//! ```

pub mod global;
pub mod pods;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::pods::{AvailableArgs, CheckArgs, InstallArgs, RemoveArgs, UpdateArgs};
use clap::{Parser, Subcommand};

/// Pod manager for qmake projects
///
/// Installs third-party sources as git submodules and keeps the qmake
/// include files in sync.
#[derive(Debug, Parser)]
#[command(
    name = "pods",
    author,
    version,
    about = "Pod manager for qmake projects",
    long_about = "pods-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Installs pods (third-party sources) as git submodules, records\n\
                  their metadata in .podinfo and generates pods.pri and\n\
                  pods-subdirs.pri for qmake. Every generated file is staged.\n\n\
                  Run `pods init` in a new project, then `pods install <name>`.\n\
                  See `pods <command> --help` for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, pods looks for `pods.toml` in the current directory.\n\
                  Additional files can be given with --config, those are loaded\n\
                  after it. PODS_* environment variables override both, e.g.\n\
                  PODS_INDEX__SOURCES=https://example.com/pods.json."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files used.
    #[command(name = "config-files")]
    ConfigFiles,

    /// Makes the repository a pods project, running `git init` if needed.
    Init,

    /// Installs pods.
    Install(InstallArgs),

    /// Removes pods.
    Remove(RemoveArgs),

    /// Updates pods to the head of the update branch.
    Update(UpdateArgs),

    /// Lists installed pods.
    List,

    /// Lists pods offered by the index sources.
    Available(AvailableArgs),

    /// Checks that pods follow the expected layout.
    Check(CheckArgs),

    /// Regenerates and stages the qmake files.
    Generate,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
