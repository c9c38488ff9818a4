//! Parsing a configuration file into resolved paths

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::config::Options;
use crate::constants::RESERVED_PREFIX;
use crate::paths::{Diagnostic, ResolvedPaths};
use crate::{Error, Result};

/// Resolve the `[tool.project-paths]` table of the file at `config_path`.
pub fn resolve(config_path: impl AsRef<Path>) -> Result<ResolvedPaths> {
    resolve_with(config_path, &Options::default())
}

/// Resolve the table selected by `options` of the file at `config_path`.
///
/// Relative entries are joined onto the file's parent directory and absolute
/// entries are kept. Entries whose key starts with `_` are reserved: they are
/// skipped with a warning and reported through
/// [`ResolvedPaths::diagnostics`].
pub fn resolve_with(config_path: impl AsRef<Path>, options: &Options) -> Result<ResolvedPaths> {
    let config_path = config_path.as_ref();
    let document = load_table(config_path)?;

    let section = find_section(&document, options.section()).ok_or_else(|| {
        Error::ConfigurationSectionNotFound {
            section: options.section_name(),
            path: absolute(config_path),
        }
    })?;

    let base = config_path.parent().unwrap_or(Path::new(""));
    let mut paths = BTreeMap::new();
    let mut diagnostics = Vec::new();

    for (name, value) in section {
        if name.starts_with(RESERVED_PREFIX) {
            let diagnostic = Diagnostic::ReservedName { name: name.clone() };
            tracing::warn!(config = %config_path.display(), "{}", diagnostic);
            diagnostics.push(diagnostic);
            continue;
        }

        let segment = value.as_str().ok_or_else(|| Error::InvalidPathValue {
            name: name.clone(),
            found: value.type_str().to_string(),
            path: config_path.to_path_buf(),
        })?;

        let path = make_path(base, segment);
        tracing::debug!(name = %name, path = %path.display(), "Resolved path");
        paths.insert(name.clone(), path);
    }

    Ok(ResolvedPaths::new(
        config_path.to_path_buf(),
        paths,
        diagnostics,
    ))
}

/// Read and parse a TOML document.
fn load_table(path: &Path) -> Result<Table> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    toml::from_str(&content).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Follow `section` through nested tables.
fn find_section<'a>(document: &'a Table, section: &[String]) -> Option<&'a Table> {
    section
        .iter()
        .try_fold(document, |table, key| table.get(key)?.as_table())
}

/// `segment` relative to `base`, unless it is already absolute.
fn make_path(base: &Path, segment: &str) -> PathBuf {
    let path = Path::new(segment);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn absolute(path: &Path) -> PathBuf {
    dunce::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
