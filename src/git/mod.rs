// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!          PodManager
//!        |           |
//!        v           v
//!   query.rs     GitMutation (injected)
//!        |           |
//!        v           v
//!    GixBackend  ShellBackend
//!    .is_repo    .submodule add/deinit
//!    .branch     .rm / .stash / .checkout
//!    .dirty      .pull / .add / .init
//! ```
//!
//! **`GixBackend`**: pure Rust, no subprocess, read-only.
//! **`ShellBackend`**: git CLI for submodules and every write.

pub mod backend;
pub mod query;
