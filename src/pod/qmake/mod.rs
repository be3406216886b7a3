// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! qmake build files generated for the installed pods.
//!
//! ```text
//! pods.pri           include(<pod>/<pod>.pri) per pod    rewritten every time
//! pods-subdirs.pri   SUBDIRS += <pod> ...                rewritten every time
//! <dirname>.pro      TEMPLATE = subdirs umbrella         created once, never touched
//! ```
//!
//! The header text is kept byte-compatible with files produced by qt-pods so
//! that regenerating in an existing project yields no diff.

use std::fmt::Write as _;
use std::path::Path;

use super::Pod;
use crate::error::{ManifestError, PodError, PodResult};

/// Include aggregator for application projects.
pub const PODS_PRI: &str = "pods.pri";

/// Subdirs aggregator for the umbrella project.
pub const PODS_SUBDIRS_PRI: &str = "pods-subdirs.pri";

const PODS_PRI_HEADER: &str = "# Auto-generated by qt-pods. Do not edit.\n\
                               # Include this to your application project file with:\n\
                               # include(../pods.pri)\n\
                               # This file should be put under version control.\n";

const PODS_SUBDIRS_PRI_HEADER: &str = "# Auto-generated by qt-pods. Do not edit.\n\
                                       # Include this to your subdirs project file with:\n\
                                       # include(pods-subdirs.pri)\n\
                                       # This file should be put under version control.\n";

const SUBDIRS_PRO: &str = "# Auto-generated by qt-pods.\n\
                           # This file should be put under version control.\n\
                           TEMPLATE = subdirs\n\
                           include(pods-subdirs.pri)\n\
                           SUBDIRS +=\n";

/// Render `pods.pri`.
#[must_use]
pub fn render_pods_pri(pods: &[Pod]) -> String {
    let mut out = String::from(PODS_PRI_HEADER);
    out.push('\n');
    for pod in pods {
        let _ = writeln!(out, "include({0}/{0}.pri)", pod.name);
    }
    out.push('\n');
    out
}

/// Render `pods-subdirs.pri`.
#[must_use]
pub fn render_pods_subdirs_pri(pods: &[Pod]) -> String {
    let mut out = String::from(PODS_SUBDIRS_PRI_HEADER);
    out.push('\n');
    out.push_str("SUBDIRS += ");
    for pod in pods {
        let _ = write!(out, "\\\n\t{} ", pod.name);
    }
    out.push_str("\n\n");
    out
}

/// Default content of the umbrella project.
#[must_use]
pub const fn render_subdirs_pro() -> &'static str {
    SUBDIRS_PRO
}

/// Umbrella project file name: the repository directory name plus `.pro`.
///
/// # Errors
///
/// Returns an error if the repository path cannot be canonicalized or has no
/// final component.
pub fn subdirs_pro_name(repo: &Path) -> PodResult<String> {
    let canonical = repo.canonicalize()?;
    let name = canonical
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            PodError::other(format!(
                "cannot derive project name from {}",
                canonical.display()
            ))
        })?;
    Ok(format!("{name}.pro"))
}

fn write_file(repo: &Path, name: &str, content: &str) -> PodResult<()> {
    let path = repo.join(name);
    std::fs::write(&path, content).map_err(|source| {
        ManifestError::Write {
            path: path.display().to_string(),
            source,
        }
        .into()
    })
}

/// Overwrite `pods.pri`, returning its name relative to the repository.
///
/// # Errors
///
/// Returns a `ManifestError::Write` if the file cannot be written.
pub fn write_pods_pri(repo: &Path, pods: &[Pod]) -> PodResult<&'static str> {
    write_file(repo, PODS_PRI, &render_pods_pri(pods))?;
    Ok(PODS_PRI)
}

/// Overwrite `pods-subdirs.pri`, returning its name relative to the repository.
///
/// # Errors
///
/// Returns a `ManifestError::Write` if the file cannot be written.
pub fn write_pods_subdirs_pri(repo: &Path, pods: &[Pod]) -> PodResult<&'static str> {
    write_file(repo, PODS_SUBDIRS_PRI, &render_pods_subdirs_pri(pods))?;
    Ok(PODS_SUBDIRS_PRI)
}

/// Create the umbrella project if it does not exist yet.
///
/// Returns its name relative to the repository and whether it was created.
///
/// # Errors
///
/// Returns an error if the name cannot be derived or the file cannot be written.
pub fn ensure_subdirs_pro(repo: &Path) -> PodResult<(String, bool)> {
    let name = subdirs_pro_name(repo)?;
    if repo.join(&name).exists() {
        return Ok((name, false));
    }
    write_file(repo, &name, render_subdirs_pro())?;
    Ok((name, true))
}
