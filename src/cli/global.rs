// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! -C DIR            ← Repository the command works on
//! --config FILE     ← Additional config files (can repeat)
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (falls back to --log-level)
//! --log-file FILE   ← global.log_file override
//!
//! Precedence: CLI flags > PODS_* env > --config > pods.toml > defaults
//! ```

use crate::config::loader::ConfigLoader;
use crate::error::Result;
use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Args)]
pub struct GlobalOptions {
    /// Repository to operate on.
    #[arg(
        short = 'C',
        long = "repository",
        value_name = "DIR",
        default_value = ".",
        global = true
    )]
    pub repository: PathBuf,

    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append, global = true)]
    pub configs: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self {
            repository: PathBuf::from("."),
            configs: Vec::new(),
            log_level: None,
            file_log_level: None,
            log_file: None,
        }
    }
}

impl GlobalOptions {
    /// Apply command-line flags as configuration overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be set on the loader.
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> Result<ConfigLoader> {
        if let Some(level) = self.log_level {
            loader = loader.set("global.output_log_level", i64::from(level))?;
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            loader = loader.set("global.file_log_level", i64::from(level))?;
        }

        if let Some(ref path) = self.log_file {
            loader = loader.set("global.log_file", path.display().to_string())?;
        }

        Ok(loader)
    }
}
