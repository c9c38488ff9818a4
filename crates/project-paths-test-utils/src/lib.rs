//! Shared test utilities for the project-paths workspace.
//!
//! Provides [`TestProject`], a temporary directory tree with helpers for
//! writing configuration files and placeholder source files. It is a
//! dev-dependency only, never published.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Name of the table the fixtures write entries into.
pub const SECTION_HEADER: &str = "[tool.project-paths]";

/// A temporary project tree.
///
/// # Example
///
/// ```rust,no_run
/// use project_paths_test_utils::TestProject;
///
/// let project = TestProject::new();
/// let config = project.write_paths("", &[("tests", "tests/"), ("absolute", "/opt/data")]);
/// let caller = project.write_source("tests/a/test_x.rs");
/// assert!(config.is_file());
/// assert!(caller.is_file());
/// ```
pub struct TestProject {
    temp_dir: TempDir,
    root: PathBuf,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        // Canonical so expectations match what discovery reports
        let root = dunce::canonicalize(temp_dir.path()).unwrap();
        Self { temp_dir, root }
    }

    /// Canonical root of the temporary directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The underlying temporary directory.
    pub fn temp_dir(&self) -> &TempDir {
        &self.temp_dir
    }

    /// Absolute path of `relative` inside the project.
    pub fn path(&self, relative: &str) -> PathBuf {
        if relative.is_empty() {
            self.root.clone()
        } else {
            self.root.join(relative)
        }
    }

    /// Create `relative` and all of its parents.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let dir = self.path(relative);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write `pyproject.toml` with raw `content` into directory `dir`.
    pub fn write_config(&self, dir: &str, content: &str) -> PathBuf {
        self.write_file(dir, "pyproject.toml", content)
    }

    /// Write `file_name` with raw `content` into directory `dir`.
    pub fn write_file(&self, dir: &str, file_name: &str, content: &str) -> PathBuf {
        let path = self.create_dir(dir).join(file_name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a `pyproject.toml` in `dir` declaring `entries` under
    /// [`SECTION_HEADER`]. Values are escaped as TOML strings.
    pub fn write_paths(&self, dir: &str, entries: &[(&str, &str)]) -> PathBuf {
        self.write_config(dir, &paths_table(entries))
    }

    /// Create an empty source file at `relative`, for use as a caller location.
    pub fn write_source(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "// fixture\n").unwrap();
        path
    }
}

/// Render `entries` as a `[tool.project-paths]` table.
pub fn paths_table(entries: &[(&str, &str)]) -> String {
    let mut content = format!("{SECTION_HEADER}\n");
    for (name, value) in entries {
        let key = toml::Value::String(name.to_string());
        let value = toml::Value::String(value.to_string());
        content.push_str(&format!("{key} = {value}\n"));
    }
    content
}
