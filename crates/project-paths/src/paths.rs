//! The resolved path table

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Non-fatal finding recorded while resolving a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Diagnostic {
    /// A key with the reserved `_` prefix was skipped.
    ReservedName { name: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ReservedName { name } => {
                write!(f, "{name} is inaccessible due to leading underscore")
            }
        }
    }
}

/// Paths declared by one configuration file, keyed by name.
///
/// Relative entries have already been joined onto the directory holding the
/// configuration file; absolute entries are kept as written. The table is
/// immutable once resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPaths {
    config_path: PathBuf,
    paths: BTreeMap<String, PathBuf>,
    diagnostics: Vec<Diagnostic>,
}

impl ResolvedPaths {
    /// Names of the collection's own accessors, listed by [`members`](Self::members).
    pub const INTRINSIC_MEMBERS: &'static [&'static str] = &[
        "config_path",
        "contains",
        "diagnostics",
        "get",
        "is_empty",
        "iter",
        "len",
        "members",
        "names",
        "project_root",
    ];

    pub(crate) fn new(
        config_path: PathBuf,
        paths: BTreeMap<String, PathBuf>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            config_path,
            paths,
            diagnostics,
        }
    }

    /// Look up the path declared under `name`.
    pub fn get(&self, name: &str) -> Result<&Path> {
        self.paths
            .get(name)
            .map(PathBuf::as_path)
            .ok_or_else(|| Error::UnknownPathName {
                name: name.to_string(),
                config_path: self.config_path.clone(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.paths.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Declared names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.paths.keys().map(String::as_str).collect()
    }

    /// Declared names together with [`Self::INTRINSIC_MEMBERS`], sorted and
    /// without duplicates.
    pub fn members(&self) -> Vec<String> {
        let members: BTreeSet<&str> = Self::INTRINSIC_MEMBERS
            .iter()
            .copied()
            .chain(self.paths.keys().map(String::as_str))
            .collect();
        members.into_iter().map(str::to_string).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.paths
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }

    /// The configuration file these paths were read from.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Directory containing the configuration file.
    pub fn project_root(&self) -> &Path {
        self.config_path.parent().unwrap_or(Path::new(""))
    }

    /// Reserved entries skipped during resolution, in key order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl std::ops::Index<&str> for ResolvedPaths {
    type Output = Path;

    /// # Panics
    ///
    /// Panics if `name` is not declared; use [`ResolvedPaths::get`] to handle
    /// that case.
    fn index(&self, name: &str) -> &Path {
        match self.get(name) {
            Ok(path) => path,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<'a> IntoIterator for &'a ResolvedPaths {
    type Item = (&'a String, &'a PathBuf);
    type IntoIter = std::collections::btree_map::Iter<'a, String, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

impl fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResolvedPaths({:?})", self.config_path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResolvedPaths {
        let mut paths = BTreeMap::new();
        paths.insert("tests".to_string(), PathBuf::from("/repo/tests"));
        paths.insert("absolute".to_string(), PathBuf::from("/opt/data"));
        ResolvedPaths::new(PathBuf::from("/repo/pyproject.toml"), paths, Vec::new())
    }

    #[test]
    fn intrinsic_members_are_sorted() {
        let mut sorted = ResolvedPaths::INTRINSIC_MEMBERS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, ResolvedPaths::INTRINSIC_MEMBERS);
    }

    #[test]
    fn members_merge_declared_names_in_order() {
        let members = sample().members();
        let mut sorted = members.clone();
        sorted.sort();

        assert_eq!(members, sorted);
        assert!(members.contains(&"tests".to_string()));
        assert!(members.contains(&"absolute".to_string()));
        assert!(members.contains(&"get".to_string()));
        assert_eq!(members.len(), ResolvedPaths::INTRINSIC_MEMBERS.len() + 2);
    }

    #[test]
    fn declared_name_shadowing_a_member_is_listed_once() {
        let mut paths = BTreeMap::new();
        paths.insert("len".to_string(), PathBuf::from("/repo/len"));
        let resolved = ResolvedPaths::new(PathBuf::from("/repo/pyproject.toml"), paths, Vec::new());

        assert_eq!(resolved.members().len(), ResolvedPaths::INTRINSIC_MEMBERS.len());
        assert_eq!(resolved.get("len").unwrap(), Path::new("/repo/len"));
    }

    #[test]
    fn index_returns_declared_path() {
        assert_eq!(&sample()["tests"], Path::new("/repo/tests"));
    }

    #[test]
    #[should_panic(expected = "no path named \"docs\"")]
    fn index_panics_on_unknown_name() {
        let _ = &sample()["docs"];
    }

    #[test]
    fn project_root_is_config_parent() {
        assert_eq!(sample().project_root(), Path::new("/repo"));
    }

    #[test]
    fn display_names_the_configuration_file() {
        assert_eq!(
            sample().to_string(),
            "ResolvedPaths(\"/repo/pyproject.toml\")"
        );
    }

    #[test]
    fn reserved_name_diagnostic_message() {
        let diagnostic = Diagnostic::ReservedName {
            name: "_paths".to_string(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "_paths is inaccessible due to leading underscore"
        );
    }
}
