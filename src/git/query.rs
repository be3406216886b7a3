// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git query operations using gix backend.
//!
//! ```text
//! query.rs --> GixBackend --> .git/ (no subprocess)
//! ```

use crate::error::PodResult;
use std::path::Path;

use super::backend::{GitQuery, GixBackend};

#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    GixBackend::is_git_repo(path)
}

/// Get current branch name (None if HEAD is detached).
///
/// # Errors
///
/// Returns a `GitError` if the repository cannot be opened or head resolution fails.
pub fn current_branch(path: &Path) -> PodResult<Option<String>> {
    GixBackend::current_branch(path)
}

/// Check for uncommitted changes (staged, unstaged, or untracked files).
///
/// # Errors
///
/// Returns a `GitError` if the repository cannot be opened or status check fails.
pub fn has_uncommitted_changes(path: &Path) -> PodResult<bool> {
    GixBackend::has_uncommitted_changes(path)
}
