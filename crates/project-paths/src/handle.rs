//! Process-wide handles that resolve on every access
//!
//! A handle is created once and shared by every caller, but each access runs
//! discovery again against the location of *that* access. Nothing is cached,
//! so two call sites owned by different configuration files never see each
//! other's paths, and edits to a configuration file are picked up by the
//! next access.

use std::path::PathBuf;
use std::sync::LazyLock;

use crate::config::Options;
use crate::discovery::find_caller_relative_configuration;
use crate::location::LocationProvider;
use crate::paths::ResolvedPaths;
use crate::resolver::resolve_with;
use crate::Result;

/// Shared [`ProjectPaths`] handle with default options.
pub static PATHS: LazyLock<ProjectPaths> = LazyLock::new(ProjectPaths::new);

/// Shared [`ProjectRoot`] handle with default options.
pub static PROJECT_ROOT: LazyLock<ProjectRoot> = LazyLock::new(ProjectRoot::new);

/// Resolves the caller's path table on each access.
///
/// ```no_run
/// use project_paths::{PATHS, here};
///
/// let tests = PATHS.get(&here!(), "tests")?;
/// assert!(tests.is_absolute());
/// # Ok::<(), project_paths::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProjectPaths {
    options: Options,
}

impl ProjectPaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Path of the configuration file that owns the caller.
    pub fn configuration<P>(&self, caller: &P) -> Result<PathBuf>
    where
        P: LocationProvider + ?Sized,
    {
        find_caller_relative_configuration(caller, &self.options)
    }

    /// Discover and resolve the caller's configuration.
    pub fn resolve<P>(&self, caller: &P) -> Result<ResolvedPaths>
    where
        P: LocationProvider + ?Sized,
    {
        let config_path = self.configuration(caller)?;
        resolve_with(config_path, &self.options)
    }

    /// Path declared under `name` in the caller's configuration.
    pub fn get<P>(&self, caller: &P, name: &str) -> Result<PathBuf>
    where
        P: LocationProvider + ?Sized,
    {
        self.resolve(caller)?.get(name).map(|path| path.to_path_buf())
    }

    /// Number of declared, non-reserved entries.
    pub fn len<P>(&self, caller: &P) -> Result<usize>
    where
        P: LocationProvider + ?Sized,
    {
        Ok(self.resolve(caller)?.len())
    }

    /// Declared names, sorted.
    pub fn names<P>(&self, caller: &P) -> Result<Vec<String>>
    where
        P: LocationProvider + ?Sized,
    {
        let resolved = self.resolve(caller)?;
        Ok(resolved.names().into_iter().map(str::to_string).collect())
    }

    /// Declared names plus the resolved collection's own members, sorted.
    pub fn members<P>(&self, caller: &P) -> Result<Vec<String>>
    where
        P: LocationProvider + ?Sized,
    {
        Ok(self.resolve(caller)?.members())
    }
}

/// Resolves to the directory holding the caller's configuration file.
#[derive(Debug, Clone, Default)]
pub struct ProjectRoot {
    options: Options,
}

impl ProjectRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    pub fn path<P>(&self, caller: &P) -> Result<PathBuf>
    where
        P: LocationProvider + ?Sized,
    {
        let config_path = find_caller_relative_configuration(caller, &self.options)?;
        Ok(config_path
            .parent()
            .map(|parent| parent.to_path_buf())
            .unwrap_or_default())
    }

    pub fn join<P>(&self, caller: &P, segment: impl AsRef<std::path::Path>) -> Result<PathBuf>
    where
        P: LocationProvider + ?Sized,
    {
        Ok(self.path(caller)?.join(segment))
    }

    /// The root rendered for display.
    pub fn display<P>(&self, caller: &P) -> Result<String>
    where
        P: LocationProvider + ?Sized,
    {
        Ok(self.path(caller)?.display().to_string())
    }
}
