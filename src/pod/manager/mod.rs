// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pod operations on a repository.
//!
//! ```text
//! install  repo? -> name ok? -> submodule add -> .podinfo write -> add .podinfo -> generate
//! remove   repo? -> name ok? -> deinit -f -> rm -rf -> rm .git/modules/<pod>
//!                 -> .podinfo purge -> add .podinfo -> generate
//! update   repo? -> <pod>/ exists? -> stash -> checkout <branch> -> pull
//! create   repo? or (mkdir + git init) -> repo? -> generate
//! generate pods.pri -> add -> pods-subdirs.pri -> add -> <dir>.pro (if absent) -> add
//! ```
//!
//! Each arrow is a gate: the first failing step ends the operation with its
//! error. Steps that already ran are not undone, so a failed batch install
//! leaves the pods added before the failure in place.

use std::path::Path;
use tracing::{debug, info, info_span, warn};

use super::manifest::{self, PODINFO, PodInfo};
use super::{Pod, index, qmake, validate_name};
use crate::config::Config;
use crate::error::{PodOpError, PodResult};
use crate::git::backend::{GitMutation, ShellBackend};
use crate::git::query;
use crate::net::IndexClient;

/// Files every pod must ship, besides `<name>.pri` and `<name>.pro`.
const REQUIRED_POD_FILES: [&str; 2] = ["LICENSE", "README.md"];

/// Runs pod operations through a git backend.
#[derive(Debug, Clone)]
pub struct PodManager<G = ShellBackend> {
    git: G,
    update_branch: String,
}

impl PodManager<ShellBackend> {
    /// Create a manager using the git CLI configured in `[git]`.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError::ExecutableNotFound` if git cannot be found.
    pub fn from_config(config: &Config) -> PodResult<Self> {
        let git = ShellBackend::from_config(&config.git)?;
        Ok(Self::new(git, config.git.update_branch.clone()))
    }
}

impl<G: GitMutation> PodManager<G> {
    pub fn new(git: G, update_branch: impl Into<String>) -> Self {
        Self {
            git,
            update_branch: update_branch.into(),
        }
    }

    #[must_use]
    pub const fn git(&self) -> &G {
        &self.git
    }

    #[must_use]
    pub fn update_branch(&self) -> &str {
        &self.update_branch
    }

    /// Check whether `repo` is the root of a git repository.
    #[must_use]
    pub fn is_git_repository(&self, repo: &Path) -> bool {
        let result = query::is_git_repo(repo);
        debug!(repo = %repo.display(), result, "repository check");
        result
    }

    fn require_repository(&self, repo: &Path) -> PodResult<()> {
        if self.is_git_repository(repo) {
            Ok(())
        } else {
            Err(PodOpError::NotARepository {
                path: repo.display().to_string(),
            }
            .into())
        }
    }

    /// Install one pod and regenerate the qmake files.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing step.
    pub fn install_pod(&self, repo: &Path, pod: &Pod) -> PodResult<()> {
        self.require_repository(repo)?;
        self.add_pod_submodule(repo, pod)?;
        self.regenerate(repo)
    }

    /// Install pods in order, then regenerate the qmake files once.
    ///
    /// Stops at the first pod that fails; pods installed before it stay.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing step.
    pub fn install_pods(&self, repo: &Path, pods: &[Pod]) -> PodResult<()> {
        self.require_repository(repo)?;
        for pod in pods {
            self.add_pod_submodule(repo, pod)?;
        }
        self.regenerate(repo)
    }

    /// Remove one pod and regenerate the qmake files.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing step.
    pub fn remove_pod(&self, repo: &Path, name: &str) -> PodResult<()> {
        self.require_repository(repo)?;
        self.remove_pod_submodule(repo, name)?;
        self.regenerate(repo)
    }

    /// Remove pods in order, then regenerate the qmake files once.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing step.
    pub fn remove_pods(&self, repo: &Path, names: &[String]) -> PodResult<()> {
        self.require_repository(repo)?;
        for name in names {
            self.remove_pod_submodule(repo, name)?;
        }
        self.regenerate(repo)
    }

    /// Bring one pod up to date with its update branch.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing step.
    pub fn update_pod(&self, repo: &Path, name: &str) -> PodResult<()> {
        self.require_repository(repo)?;
        self.update_pod_submodule(repo, name)
    }

    /// Update pods in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing step.
    pub fn update_pods(&self, repo: &Path, names: &[String]) -> PodResult<()> {
        self.require_repository(repo)?;
        for name in names {
            self.update_pod_submodule(repo, name)?;
        }
        Ok(())
    }

    /// Update every installed pod, then regenerate the qmake files.
    ///
    /// Every pod is attempted even if an earlier one fails.
    ///
    /// # Errors
    ///
    /// Returns a `PodOpError::UpdateFailed` naming the pods that failed, or the
    /// error of a failing listing or generation step.
    pub fn update_all_pods(&self, repo: &Path) -> PodResult<()> {
        self.require_repository(repo)?;

        let mut failed = Vec::new();
        for pod in self.list_installed_pods(repo)? {
            if let Err(e) = self.update_pod_submodule(repo, &pod.name) {
                warn!(pod = %pod.name, error = %e, "update failed");
                failed.push(pod.name);
            }
        }
        if !failed.is_empty() {
            return Err(PodOpError::UpdateFailed { pods: failed }.into());
        }

        self.regenerate(repo)
    }

    /// Installed pods with metadata from `.podinfo`.
    ///
    /// # Errors
    ///
    /// Returns a `ManifestError` if `.gitmodules` or `.podinfo` cannot be parsed.
    pub fn list_installed_pods(&self, repo: &Path) -> PodResult<Vec<Pod>> {
        let mut pods = manifest::read_submodules(repo)?;
        let info = PodInfo::new(repo);
        for pod in &mut pods {
            info.read_into(pod)?;
        }
        Ok(pods)
    }

    /// Pods offered by the index sources, in source order.
    pub async fn list_available_pods(&self, client: &IndexClient, sources: &[String]) -> Vec<Pod> {
        index::list_available(client, sources).await
    }

    /// Rewrite and stage the qmake files for the installed pods.
    ///
    /// # Errors
    ///
    /// Returns a `PodOpError::NotARepository` or the error of the first
    /// failing write or stage step.
    pub fn generate_qmake_files(&self, repo: &Path) -> PodResult<()> {
        self.require_repository(repo)?;
        self.regenerate(repo)
    }

    /// Check that a pod follows the expected layout.
    ///
    /// The name must be lowercase and `<repo>/<name>` must contain `LICENSE`,
    /// `README.md`, `<name>.pri` and `<name>.pro`.
    #[must_use]
    pub fn check_pod(&self, repo: &Path, name: &str) -> bool {
        let dir = repo.join(name);
        let pri = format!("{name}.pri");
        let pro = format!("{name}.pro");

        let valid = name == name.to_lowercase()
            && dir.is_dir()
            && REQUIRED_POD_FILES
                .into_iter()
                .chain([pri.as_str(), pro.as_str()])
                .all(|file| dir.join(file).exists());

        debug!(pod = %name, valid, "pod check");
        valid
    }

    /// Make `repo` a pods project: `git init` it if needed, then generate.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing step.
    pub fn create_project(&self, repo: &Path) -> PodResult<()> {
        if !self.is_git_repository(repo) {
            info!(repo = %repo.display(), "initializing repository");
            std::fs::create_dir_all(repo)?;
            self.git.init_repo(repo)?;
        }
        self.require_repository(repo)?;
        self.regenerate(repo)
    }

    // --- steps ---

    fn add_pod_submodule(&self, repo: &Path, pod: &Pod) -> PodResult<()> {
        let _span = info_span!("install", pod = %pod.name).entered();
        validate_name(&pod.name)?;

        self.git.add_submodule(repo, &pod.url, &pod.name)?;
        PodInfo::new(repo).write(pod)?;
        self.git.stage(repo, PODINFO)?;

        info!(url = %pod.url, "installed pod");
        Ok(())
    }

    fn remove_pod_submodule(&self, repo: &Path, name: &str) -> PodResult<()> {
        let _span = info_span!("remove", pod = %name).entered();
        validate_name(name)?;

        self.git.deinit_submodule(repo, name)?;
        self.git.remove_path(repo, name)?;

        let module_dir = repo.join(".git").join("modules").join(name);
        if module_dir.exists() {
            debug!(path = %module_dir.display(), "removing module directory");
            std::fs::remove_dir_all(&module_dir)?;
        }

        PodInfo::new(repo).purge(name)?;
        self.git.stage(repo, PODINFO)?;

        info!("removed pod");
        Ok(())
    }

    fn update_pod_submodule(&self, repo: &Path, name: &str) -> PodResult<()> {
        let _span = info_span!("update", pod = %name).entered();
        validate_name(name)?;

        let dir = repo.join(name);
        if !dir.is_dir() {
            return Err(PodOpError::NotInstalled {
                name: name.to_string(),
            }
            .into());
        }

        // stash is a no-op on a clean worktree
        self.git.stash(&dir)?;
        self.git.checkout(&dir, &self.update_branch)?;
        self.git.pull(&dir)?;

        info!(branch = %self.update_branch, "updated pod");
        Ok(())
    }

    fn regenerate(&self, repo: &Path) -> PodResult<()> {
        let pods = self.list_installed_pods(repo)?;

        let pri = qmake::write_pods_pri(repo, &pods)?;
        self.git.stage(repo, pri)?;

        let subdirs = qmake::write_pods_subdirs_pri(repo, &pods)?;
        self.git.stage(repo, subdirs)?;

        let (pro, created) = qmake::ensure_subdirs_pro(repo)?;
        if created {
            debug!(file = %pro, "created umbrella project");
        }
        self.git.stage(repo, &pro)?;

        info!(pods = pods.len(), "generated qmake files");
        Ok(())
    }
}
