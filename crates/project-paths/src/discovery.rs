//! Configuration file discovery
//!
//! Walks from a starting directory up to the filesystem root looking for the
//! configuration file, and derives that starting directory from the caller.

use std::path::{Path, PathBuf};

use crate::config::Options;
use crate::location::{LocationProvider, SkipSet};
use crate::{Error, Result};

/// Find `file_name` in `start` or the nearest of its ancestors.
///
/// The closest match wins. The search is anchored at the canonical form of
/// `start` when it exists, so `..` components and symlinked directories do
/// not cut the walk short.
pub fn locate_configuration(start: &Path, file_name: &str) -> Result<PathBuf> {
    let base = dunce::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());
    tracing::debug!(start = %base.display(), file_name, "Searching for configuration");

    for directory in base.ancestors() {
        let candidate = directory.join(file_name);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "Found configuration");
            return Ok(candidate);
        }
    }

    Err(Error::ConfigurationFileNotFound {
        file_name: file_name.to_string(),
        start: start.to_path_buf(),
    })
}

/// Find the configuration file that owns the caller reported by `provider`.
pub fn find_caller_relative_configuration<P>(provider: &P, options: &Options) -> Result<PathBuf>
where
    P: LocationProvider + ?Sized,
{
    let start = starting_directory(provider, options.skip_set())?;
    locate_configuration(&start, options.file_name())
}

/// Directory discovery should start from for the caller reported by `provider`.
///
/// The caller is the innermost frame outside the skip set's internal modules.
/// Its source file's directory is used when known; introspection modules and
/// the top-level context use the working directory instead.
pub fn starting_directory<P>(provider: &P, skip: &SkipSet) -> Result<PathBuf>
where
    P: LocationProvider + ?Sized,
{
    let stack = provider.call_stack();
    let caller = stack
        .iter()
        .find(|frame| !skip.is_internal(frame.module()))
        .ok_or_else(|| {
            Error::unresolvable(format!(
                "no caller outside of the skipped modules among {} frame(s)",
                stack.len()
            ))
        })?;

    tracing::debug!(caller = %caller, "Attributed access");

    if skip.is_introspection(caller.module()) {
        return current_dir();
    }

    if let Some(dir) = caller.source_dir() {
        return Ok(dir);
    }

    if caller.is_top_level() {
        return current_dir();
    }

    Err(Error::unresolvable(format!(
        "unable to determine source file of calling module: {}",
        caller.module()
    )))
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| Error::io(".", e))
}
