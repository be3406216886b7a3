// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! Config: GlobalConfig, IndexConfig, GitConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Default request timeout for index sources.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file (no file logging when unset).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Pod index sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// URLs of JSON pod indexes, queried in order.
    pub sources: Vec<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header sent to index sources.
    pub user_agent: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("pods-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Git invocation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Git executable, resolved through `PATH` when not absolute.
    pub program: PathBuf,
    /// Branch checked out in a pod before pulling.
    pub update_branch: String,
    /// Extra `key=value` settings passed as `-c` to every git call.
    pub config: Vec<String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("git"),
            update_branch: "master".to_string(),
            config: Vec::new(),
        }
    }
}
