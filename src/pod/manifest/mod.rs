// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository manifests.
//!
//! ```text
//! .gitmodules (written by git, read only here)
//!   [submodule "qtjson"]
//!       path = qtjson          --> Pod.name
//!       url = https://...      --> Pod.url
//!
//! .podinfo (owned by pods-rs, staged after each write)
//!   [qtjson]
//!   author="..."               values quoted, \\ and \" escaped
//!   description="..."
//!   license="..."
//!   website="..."
//! ```

use ini::{EscapePolicy, Ini};
use std::path::{Path, PathBuf};
use tracing::trace;

use super::Pod;
use crate::error::{ManifestError, PodResult};

/// Submodule manifest file name.
pub const GITMODULES: &str = ".gitmodules";

/// Pod metadata file name.
pub const PODINFO: &str = ".podinfo";

const AUTHOR: &str = "author";
const DESCRIPTION: &str = "description";
const LICENSE: &str = "license";
const WEBSITE: &str = "website";

/// Quote a `.podinfo` value so edge whitespace and quotes survive a reload.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

fn parse_error(path: &Path, err: &ini::Error) -> ManifestError {
    ManifestError::Parse {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

/// Read installed pods from `<repo>/.gitmodules`.
///
/// Every section whose name starts with `submodule` becomes a pod named after
/// its `path`. Pods are ordered by section name. A missing file means no pods.
///
/// # Errors
///
/// Returns a `ManifestError::Parse` if the file exists but cannot be parsed.
pub fn read_submodules(repo: &Path) -> PodResult<Vec<Pod>> {
    let path = repo.join(GITMODULES);
    if !path.exists() {
        return Ok(Vec::new());
    }

    // git writes urls verbatim; backslashes in Windows paths are not escapes
    let ini = Ini::load_from_file_noescape(&path).map_err(|e| parse_error(&path, &e))?;

    let mut sections: Vec<(&str, Pod)> = ini
        .iter()
        .filter_map(|(section, props)| {
            let section = section?;
            if !section.starts_with("submodule") {
                return None;
            }
            let pod = Pod::new(
                props.get("path").unwrap_or_default(),
                props.get("url").unwrap_or_default(),
            );
            Some((section, pod))
        })
        .collect();
    sections.sort_by(|a, b| a.0.cmp(b.0));

    trace!(path = %path.display(), count = sections.len(), "read submodules");
    Ok(sections.into_iter().map(|(_, pod)| pod).collect())
}

/// The `.podinfo` metadata store of one repository.
#[derive(Debug, Clone)]
pub struct PodInfo {
    path: PathBuf,
}

impl PodInfo {
    #[must_use]
    pub fn new(repo: &Path) -> Self {
        Self {
            path: repo.join(PODINFO),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> PodResult<Ini> {
        if !self.path.exists() {
            return Ok(Ini::new());
        }
        Ini::load_from_file(&self.path).map_err(|e| parse_error(&self.path, &e).into())
    }

    fn save(&self, ini: &Ini) -> PodResult<()> {
        let mut quoted = Ini::new();
        for (section, props) in ini.iter() {
            let mut setter = quoted.with_section(section);
            for (key, value) in props.iter() {
                setter.set(key, quote(value));
            }
        }

        // values are already escaped by `quote`
        quoted
            .write_to_file_policy(&self.path, EscapePolicy::Nothing)
            .map_err(|source| {
                ManifestError::Write {
                    path: self.path.display().to_string(),
                    source,
                }
                .into()
            })
    }

    /// Fill the metadata of `pod` from its section, if there is one.
    ///
    /// # Errors
    ///
    /// Returns a `ManifestError::Parse` if the file exists but cannot be parsed.
    pub fn read_into(&self, pod: &mut Pod) -> PodResult<()> {
        let ini = self.load()?;
        if let Some(section) = ini.section(Some(pod.name.as_str())) {
            let field = |key: &str| section.get(key).unwrap_or_default().to_string();
            pod.author = field(AUTHOR);
            pod.description = field(DESCRIPTION);
            pod.license = field(LICENSE);
            pod.website = field(WEBSITE);
        }
        Ok(())
    }

    /// Store the metadata of `pod` in its section, keeping other sections.
    ///
    /// # Errors
    ///
    /// Returns a `ManifestError` if the file cannot be parsed or written.
    pub fn write(&self, pod: &Pod) -> PodResult<()> {
        let mut ini = self.load()?;
        ini.with_section(Some(pod.name.as_str()))
            .set(AUTHOR, pod.author.as_str())
            .set(DESCRIPTION, pod.description.as_str())
            .set(LICENSE, pod.license.as_str())
            .set(WEBSITE, pod.website.as_str());
        self.save(&ini)?;
        trace!(pod = %pod.name, path = %self.path.display(), "wrote pod info");
        Ok(())
    }

    /// Delete the section of `name`.
    ///
    /// The file is written even if the section or the file did not exist, so
    /// it can always be staged afterwards.
    ///
    /// # Errors
    ///
    /// Returns a `ManifestError` if the file cannot be parsed or written.
    pub fn purge(&self, name: &str) -> PodResult<()> {
        let mut ini = self.load()?;
        ini.delete(Some(name));
        self.save(&ini)?;
        trace!(pod = %name, path = %self.path.display(), "purged pod info");
        Ok(())
    }
}
