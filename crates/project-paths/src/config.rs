//! Options controlling discovery and resolution

use crate::constants::{DEFAULT_FILE_NAME, DEFAULT_SECTION};
use crate::location::SkipSet;

/// Which file to look for, which table to read, and which frames to skip.
///
/// The defaults read `[tool.project-paths]` from `pyproject.toml`. Any TOML
/// file with a nested table works; a Cargo package can keep its paths in its
/// manifest metadata:
///
/// ```
/// use project_paths::Options;
///
/// let options = Options::default()
///     .with_file_name("Cargo.toml")
///     .with_section(["package", "metadata", "project-paths"]);
/// assert_eq!(options.section_name(), "package.metadata.project-paths");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    file_name: String,
    section: Vec<String>,
    skip: SkipSet,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            section: DEFAULT_SECTION.iter().map(|s| s.to_string()).collect(),
            skip: SkipSet::default(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Set the table path, outermost key first.
    pub fn with_section<I, S>(mut self, section: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.section = section.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_skip_set(mut self, skip: SkipSet) -> Self {
        self.skip = skip;
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn section(&self) -> &[String] {
        &self.section
    }

    /// Dotted form of the table path, as written in a TOML header.
    pub fn section_name(&self) -> String {
        self.section.join(".")
    }

    pub fn skip_set(&self) -> &SkipSet {
        &self.skip
    }
}
