//! Error types for project-paths

use std::path::PathBuf;

/// Result type for project-paths operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while discovering or resolving project paths
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No directory from the starting point upward contains the configuration file
    #[error("cannot find {file_name} within {start} or any of its parents")]
    ConfigurationFileNotFound { file_name: String, start: PathBuf },

    /// The configuration file exists but lacks the expected table
    #[error("cannot find [{section}] within {path}")]
    ConfigurationSectionNotFound { section: String, path: PathBuf },

    /// The call site could not be attributed to an external caller
    #[error("unable to attribute call site: {reason}")]
    CallerUnresolvable { reason: String },

    /// Lookup of a name that the configuration does not declare
    #[error("no path named {name:?} in {config_path}")]
    UnknownPathName { name: String, config_path: PathBuf },

    /// A declared entry is not a string
    #[error("path {name:?} in {path} must be a string, found {found}")]
    InvalidPathValue {
        name: String,
        found: String,
        path: PathBuf,
    },

    #[error("Failed to parse TOML config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn unresolvable(reason: impl Into<String>) -> Self {
        Self::CallerUnresolvable {
            reason: reason.into(),
        }
    }
}
