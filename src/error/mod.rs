// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              PodError (~24 bytes)
//!                     |
//!   +-----+-----+-----+-----+-----+-----+-----+
//!   |     |     |     |     |     |     |     |
//!   v     v     v     v     v     v     v     v
//!  Git   Net   Cfg  Mfst   Pod  Proc   Io  Other
//!  Box   Box   Box   Box   Box   Box   Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Git      Gix, CommandFailed
//!   Network  Reqwest, HttpError, InvalidUrl
//!   Config   InvalidValue
//!   Manifest Parse, Write
//!   Pod      NotARepository, InvalidName, NotInstalled, UnknownPod, UpdateFailed
//!   Process  ExecutableNotFound, SpawnFailed
//! ```
//!
//! A failing step is returned with `?`, so the first failure of a sequence
//! ends the operation. Nothing that already succeeded is undone.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`PodError`].
pub type PodResult<T> = std::result::Result<T, PodError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum PodError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// `.gitmodules` or `.podinfo` could not be read or written.
    #[error("manifest error: {0}")]
    Manifest(#[from] Box<ManifestError>),

    /// Pod operation rejected or failed.
    #[error("pod error: {0}")]
    Pod(#[from] Box<PodOpError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl PodError {
    /// Create a [`PodError::Other`] from a message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into().into_boxed_str())
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for PodError {
                fn from(err: $error) -> Self {
                    PodError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    NetworkError => Network,
    ConfigError => Config,
    ManifestError => Manifest,
    PodOpError => Pod,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to open repository.
    #[error("failed to open repository: {0}")]
    Open(#[from] Box<gix::open::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command exited with a non-zero status.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Manifest Errors ---

/// Errors reading or writing `.gitmodules` and `.podinfo`.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// File exists but is not valid INI.
    #[error("failed to parse '{path}': {message}")]
    Parse { path: String, message: String },

    /// File could not be written.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Pod Errors ---

/// Errors raised by pod operations themselves.
#[derive(Debug, Error)]
pub enum PodOpError {
    /// The target directory is not a git repository.
    #[error("not a git repository: {path}")]
    NotARepository { path: String },

    /// The pod name cannot be used as a directory and section name.
    #[error("invalid pod name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// The pod directory does not exist in the repository.
    #[error("pod '{name}' is not installed")]
    NotInstalled { name: String },

    /// The pod is not offered by any index source.
    #[error("pod '{name}' not found in any index source")]
    UnknownPod { name: String },

    /// One or more pods failed to update.
    #[error("failed to update pods: {}", pods.join(", "))]
    UpdateFailed { pods: Vec<String> },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
