// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pods: third-party sources tracked as git submodules plus metadata.
//!
//! ```text
//! repository/
//!   .gitmodules        submodule "x": path = x, url = ...   (manifest)
//!   .podinfo           [x] author/description/license/website (manifest)
//!   pods.pri           include(x/x.pri)                      (qmake)
//!   pods-subdirs.pri   SUBDIRS += x                          (qmake)
//!   repository.pro     TEMPLATE = subdirs                    (qmake)
//!   x/                 the pod itself
//!
//! index sources (JSON over HTTP) --> available pods          (index)
//! PodManager: install / remove / update / list / check / create
//! ```

pub mod index;
pub mod manager;
pub mod manifest;
pub mod qmake;


use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::{PodOpError, PodResult};

/// A pod: submodule name/url plus descriptive metadata.
///
/// Empty strings mean the value is unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pod {
    /// Directory and submodule path inside the repository.
    pub name: String,
    /// Clone URL.
    pub url: String,
    pub author: String,
    pub description: String,
    pub license: String,
    pub website: String,
}

impl Pod {
    /// Create a pod with only name and url set.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Self::default()
        }
    }
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._+-]+$").unwrap_or_else(|_| unreachable!("static pattern"))
    })
}

/// Check that `name` can serve as a directory and INI section name.
///
/// # Errors
///
/// Returns a `PodOpError::InvalidName` for empty names, `.`/`..`, path
/// separators, or characters outside `[A-Za-z0-9._+-]`.
pub fn validate_name(name: &str) -> PodResult<()> {
    let invalid = |reason: &str| -> PodResult<()> {
        Err(PodOpError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
        .into())
    };

    if name.is_empty() {
        return invalid("name is empty");
    }
    if name == "." || name == ".." {
        return invalid("name refers to a special directory");
    }
    if name.contains('/') || name.contains('\\') {
        return invalid("name contains a path separator");
    }
    if !name_pattern().is_match(name) {
        return invalid("only letters, digits and '.', '_', '+', '-' are allowed");
    }
    Ok(())
}
