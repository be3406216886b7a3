// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for pods-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. pods.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. PODS_* env vars
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! PODS_INDEX__SOURCES=a,b         → index.sources = ["a", "b"]
//! PODS_INDEX__TIMEOUT_SECS=10     → index.timeout_secs = 10
//! PODS_GIT__UPDATE_BRANCH=main    → git.update_branch = "main"
//! ```
//!
//! # Example
//!
//! ```toml
//! [index]
//! sources = ["https://example.com/pods.json"]
//!
//! [git]
//! update_branch = "main"
//! config = ["protocol.file.allow=always"]
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GitConfig, GlobalConfig, IndexConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Pod index sources.
    pub index: IndexConfig,
    /// Git invocation settings.
    pub git: GitConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pods_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("pods.toml")
    ///     .with_env_prefix("PODS")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check values the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for an empty update branch, a zero
    /// timeout, or a git `-c` entry without `=`.
    pub fn validate(&self) -> Result<()> {
        if self.git.update_branch.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "git".to_string(),
                key: "update_branch".to_string(),
                message: "must not be empty".to_string(),
            }
            .into());
        }
        if self.index.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                section: "index".to_string(),
                key: "timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            }
            .into());
        }
        if let Some(entry) = self.git.config.iter().find(|e| !e.contains('=')) {
            return Err(ConfigError::InvalidValue {
                section: "git".to_string(),
                key: "config".to_string(),
                message: format!("expected 'key=value', got '{entry}'"),
            }
            .into());
        }
        Ok(())
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert(
            "global.output_log_level".to_string(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".to_string(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );

        options.insert("index.sources".to_string(), self.index.sources.join(", "));
        options.insert(
            "index.timeout_secs".to_string(),
            self.index.timeout_secs.to_string(),
        );
        options.insert("index.user_agent".to_string(), self.index.user_agent.clone());

        options.insert(
            "git.program".to_string(),
            self.git.program.display().to_string(),
        );
        options.insert(
            "git.update_branch".to_string(),
            self.git.update_branch.clone(),
        );
        options.insert("git.config".to_string(), self.git.config.join(", "));

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
