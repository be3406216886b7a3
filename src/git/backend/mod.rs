// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)     --> GixBackend   (pure Rust gix)
//! GitMutation (write) --> ShellBackend (git CLI)
//! ```

use crate::config::types::GitConfig;
use crate::error::{GitError, GixError, PodResult, ProcessError};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, trace};

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
pub trait GitQuery {
    /// Check if `path` is the root of a git repository.
    fn is_git_repo(path: &Path) -> bool;

    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the repository cannot be opened or head resolution fails.
    fn current_branch(path: &Path) -> PodResult<Option<String>>;

    /// Check for uncommitted changes (staged, unstaged, or untracked files).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the repository cannot be opened or status check fails.
    fn has_uncommitted_changes(path: &Path) -> PodResult<bool>;
}

// --- Mutation Trait (Write operations) ---

/// Git mutation operations used by pod management.
///
/// Each call runs in the given directory and fails on a non-zero exit code.
pub trait GitMutation {
    /// Initialize a new repository in an existing directory.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository initialization fails.
    fn init_repo(&self, path: &Path) -> PodResult<()>;

    /// `git submodule add <url> <path>`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the submodule cannot be added.
    fn add_submodule(&self, repo_path: &Path, url: &str, submodule_path: &str) -> PodResult<()>;

    /// `git submodule deinit -f <path>`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the submodule cannot be deinitialized.
    fn deinit_submodule(&self, repo_path: &Path, submodule_path: &str) -> PodResult<()>;

    /// `git rm -rf <path>`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the path cannot be removed from the index and work tree.
    fn remove_path(&self, repo_path: &Path, path: &str) -> PodResult<()>;

    /// Stash local changes.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if stashing fails.
    fn stash(&self, repo_path: &Path) -> PodResult<()>;

    /// Checkout a branch, tag, or commit.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the checkout operation fails.
    fn checkout(&self, repo_path: &Path, what: &str) -> PodResult<()>;

    /// Pull the current branch from its upstream.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the pull operation fails.
    fn pull(&self, repo_path: &Path) -> PodResult<()>;

    /// Stage a file.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the file cannot be added to the index.
    fn stage(&self, repo_path: &Path, file: &str) -> PodResult<()>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
///
/// Read-only operations without spawning subprocesses.
pub struct GixBackend;

impl GixBackend {
    fn open(path: &Path) -> PodResult<gix::Repository> {
        gix::open(path).map_err(|e| GitError::Gix(GixError::Open(Box::new(e))).into())
    }
}

impl GitQuery for GixBackend {
    fn is_git_repo(path: &Path) -> bool {
        gix::open(path).is_ok()
    }

    fn current_branch(path: &Path) -> PodResult<Option<String>> {
        let repo = Self::open(path)?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }

    fn has_uncommitted_changes(path: &Path) -> PodResult<bool> {
        use gix::status::UntrackedFiles;

        let repo = Self::open(path)?;

        let has_changes = repo
            .status(gix::progress::Discard)
            .map_err(|_| GitError::CommandFailed {
                command: "status".to_string(),
                message: "failed to prepare status check".to_string(),
            })?
            .untracked_files(UntrackedFiles::Files)
            .into_iter(None)
            .map_err(|_| GitError::CommandFailed {
                command: "status".to_string(),
                message: "failed to check repository status".to_string(),
            })?
            .next()
            .is_some();

        Ok(has_changes)
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using the git CLI.
///
/// Commands get their working directory through `current_dir`; the process
/// working directory is never changed.
#[derive(Debug, Clone)]
pub struct ShellBackend {
    program: PathBuf,
    config: Vec<String>,
}

impl ShellBackend {
    /// Create a backend for an already resolved git executable.
    #[must_use]
    pub const fn new(program: PathBuf, config: Vec<String>) -> Self {
        Self { program, config }
    }

    /// Resolve `git.program` through `PATH` and keep `git.config` overrides.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError::ExecutableNotFound` if the program cannot be found.
    pub fn from_config(git: &GitConfig) -> PodResult<Self> {
        let program = which::which(&git.program).map_err(|_| ProcessError::ExecutableNotFound {
            name: git.program.display().to_string(),
        })?;
        debug!(program = %program.display(), "resolved git");
        Ok(Self::new(program, git.config.clone()))
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Execute a git command. Sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`.
    ///
    /// Returns trimmed stdout.
    pub(crate) fn git_command(&self, args: &[&str], cwd: &Path) -> PodResult<String> {
        let command_line = format!("git {}", args.join(" "));
        debug!(cwd = %cwd.display(), command = %command_line, "running git");

        let mut command = Command::new(&self.program);
        for entry in &self.config {
            command.arg("-c").arg(entry);
        }
        let output = command
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                command: command_line.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: command_line,
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        trace!(command = %command_line, stdout = %stdout, "git finished");
        Ok(stdout)
    }
}

impl GitMutation for ShellBackend {
    fn init_repo(&self, path: &Path) -> PodResult<()> {
        self.git_command(&["init", "--quiet"], path)?;
        Ok(())
    }

    fn add_submodule(&self, repo_path: &Path, url: &str, submodule_path: &str) -> PodResult<()> {
        self.git_command(
            &["submodule", "add", "--quiet", "--", url, submodule_path],
            repo_path,
        )?;
        Ok(())
    }

    fn deinit_submodule(&self, repo_path: &Path, submodule_path: &str) -> PodResult<()> {
        self.git_command(
            &["submodule", "deinit", "--quiet", "-f", "--", submodule_path],
            repo_path,
        )?;
        Ok(())
    }

    fn remove_path(&self, repo_path: &Path, path: &str) -> PodResult<()> {
        self.git_command(&["rm", "-r", "-f", "--quiet", "--", path], repo_path)?;
        Ok(())
    }

    fn stash(&self, repo_path: &Path) -> PodResult<()> {
        self.git_command(&["stash", "--quiet"], repo_path)?;
        Ok(())
    }

    fn checkout(&self, repo_path: &Path, what: &str) -> PodResult<()> {
        self.git_command(
            &["-c", "advice.detachedHead=false", "checkout", "-q", what],
            repo_path,
        )?;
        Ok(())
    }

    fn pull(&self, repo_path: &Path) -> PodResult<()> {
        self.git_command(&["pull", "--quiet"], repo_path)?;
        Ok(())
    }

    fn stage(&self, repo_path: &Path, file: &str) -> PodResult<()> {
        self.git_command(&["add", "--", file], repo_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
