// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{GitMutation, GitQuery, GixBackend, ShellBackend};
use crate::config::types::GitConfig;
use crate::error::{GitError, PodError, ProcessError};
use std::path::PathBuf;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn shell() -> ShellBackend {
    ShellBackend::from_config(&GitConfig::default()).expect("git must be installed for tests")
}

#[test]
fn test_gix_backend_is_git_repo() {
    let temp = temp_dir();
    assert!(!GixBackend::is_git_repo(temp.path()));

    gix::init(temp.path()).expect("failed to init repo");
    assert!(GixBackend::is_git_repo(temp.path()));
}

#[test]
fn test_gix_backend_subdirectory_is_not_repo_root() {
    let temp = temp_dir();
    gix::init(temp.path()).expect("failed to init repo");
    let sub = temp.path().join("sub");
    std::fs::create_dir(&sub).unwrap();

    assert!(!GixBackend::is_git_repo(&sub));
}

#[test]
fn test_shell_backend_init_repo() {
    let temp = temp_dir();
    shell().init_repo(temp.path()).expect("failed to init repo");
    assert!(GixBackend::is_git_repo(temp.path()));
}

#[test]
fn test_uncommitted_changes_detects_untracked_file() {
    let temp = temp_dir();
    shell().init_repo(temp.path()).expect("failed to init repo");
    assert!(!GixBackend::has_uncommitted_changes(temp.path()).unwrap());

    std::fs::write(temp.path().join("notes.txt"), "x").unwrap();
    assert!(GixBackend::has_uncommitted_changes(temp.path()).unwrap());
}

#[test]
fn test_stage_then_failed_command_reports_stderr() {
    let temp = temp_dir();
    let git = shell();
    git.init_repo(temp.path()).unwrap();

    std::fs::write(temp.path().join("pods.pri"), "# generated\n").unwrap();
    git.stage(temp.path(), "pods.pri").expect("staging should succeed");

    let err = git
        .stage(temp.path(), "does-not-exist.pri")
        .expect_err("staging a missing file must fail");
    match err {
        PodError::Git(boxed) => match *boxed {
            GitError::CommandFailed { command, message } => {
                assert_eq!(command, "git add -- does-not-exist.pri");
                assert!(!message.is_empty());
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        },
        other => panic!("expected PodError::Git, got {other:?}"),
    }
}

#[test]
fn test_missing_program_is_reported() {
    let git = GitConfig {
        program: PathBuf::from("definitely-not-a-git-binary"),
        ..GitConfig::default()
    };
    match ShellBackend::from_config(&git) {
        Err(PodError::Process(boxed)) => {
            assert!(matches!(*boxed, ProcessError::ExecutableNotFound { .. }));
        }
        other => panic!("expected ExecutableNotFound, got {other:?}"),
    }
}

#[test]
fn test_current_branch_follows_symbolic_head() {
    let temp = temp_dir();
    let git = shell();
    git.init_repo(temp.path()).unwrap();
    git.git_command(&["symbolic-ref", "HEAD", "refs/heads/trunk"], temp.path())
        .unwrap();

    let branch = GixBackend::current_branch(temp.path()).unwrap();
    assert_eq!(branch.as_deref(), Some("trunk"));
}
