//! Caller locations and the providers that report them
//!
//! A [`LocationProvider`] stands in for call-stack introspection: it reports
//! the frames leading up to an access, innermost first. Discovery picks the
//! first frame that is not part of the [`SkipSet`] and starts searching for
//! the configuration file next to that frame's source file.

use std::path::{Path, PathBuf};

use crate::constants::{CRATE_MODULE, TOP_LEVEL_MODULE};

/// One call-site frame: the defining module and, if known, its source file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallerLocation {
    module: String,
    file: Option<PathBuf>,
    /// Manifest directory of the crate that compiled `file`, used to anchor
    /// the relative paths recorded by `file!()`.
    manifest_dir: Option<PathBuf>,
}

impl CallerLocation {
    /// A frame in `module` with no known source file.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            file: None,
            manifest_dir: None,
        }
    }

    /// The top-level context, resolved from the current working directory.
    pub fn top_level() -> Self {
        Self::new(TOP_LEVEL_MODULE)
    }

    /// Location captured at compile time by [`here!`](crate::here).
    #[doc(hidden)]
    pub fn from_static(module: &'static str, file: &'static str, manifest_dir: &'static str) -> Self {
        Self::new(module)
            .with_file(file)
            .with_manifest_dir(manifest_dir)
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_manifest_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.manifest_dir = Some(dir.into());
        self
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    /// The source file as recorded, before anchoring.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn is_top_level(&self) -> bool {
        self.module == TOP_LEVEL_MODULE
    }

    /// Locate the source file on disk.
    ///
    /// Absolute paths are returned as is. `file!()` records paths relative to
    /// the directory rustc was invoked from, which is the package root for a
    /// standalone crate and the workspace root for a workspace member, so a
    /// relative path is tried against the manifest directory and each of its
    /// ancestors. If none of them holds the file the path is returned relative
    /// to the working directory.
    pub fn source_file(&self) -> Option<PathBuf> {
        let file = self.file.as_deref()?;
        if file.is_absolute() {
            return Some(file.to_path_buf());
        }

        if let Some(manifest_dir) = &self.manifest_dir {
            for base in manifest_dir.ancestors() {
                let candidate = base.join(file);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }

        Some(file.to_path_buf())
    }

    /// Directory discovery starts from: the parent of the source file.
    pub fn source_dir(&self) -> Option<PathBuf> {
        let file = self.source_file()?;
        match file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Some(parent.to_path_buf()),
            _ => Some(PathBuf::from(".")),
        }
    }
}

impl std::fmt::Display for CallerLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{} ({})", self.module, file.display()),
            None => write!(f, "{}", self.module),
        }
    }
}

/// An explicit call stack, innermost frame first.
///
/// Helpers that forward to this crate on behalf of their own callers put
/// their frame first and the caller's frame after it, then list their module
/// in the [`SkipSet`]:
///
/// ```
/// use project_paths::{CallStack, CallerLocation, Options, ProjectPaths, SkipSet, here};
///
/// fn fixtures_dir(caller: CallerLocation) -> project_paths::Result<std::path::PathBuf> {
///     let stack = CallStack::new().push(here!()).push(caller);
///     let options = Options::default()
///         .with_skip_set(SkipSet::default().with_internal(module_path!()));
///     ProjectPaths::with_options(options).get(&stack, "fixtures")
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallStack {
    frames: Vec<CallerLocation>,
}

impl CallStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame further out than the ones already present.
    pub fn push(mut self, frame: CallerLocation) -> Self {
        self.frames.push(frame);
        self
    }

    pub fn frames(&self) -> &[CallerLocation] {
        &self.frames
    }
}

impl From<Vec<CallerLocation>> for CallStack {
    fn from(frames: Vec<CallerLocation>) -> Self {
        Self { frames }
    }
}

impl FromIterator<CallerLocation> for CallStack {
    fn from_iter<I: IntoIterator<Item = CallerLocation>>(iter: I) -> Self {
        Self {
            frames: iter.into_iter().collect(),
        }
    }
}

/// Provider for a caller that has no source file, such as a REPL or a
/// generated `main`. Resolves from the current working directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkingDirectory;

/// Capability reporting the frames of the current access, innermost first.
pub trait LocationProvider {
    fn call_stack(&self) -> Vec<CallerLocation>;
}

impl LocationProvider for CallerLocation {
    fn call_stack(&self) -> Vec<CallerLocation> {
        vec![self.clone()]
    }
}

impl LocationProvider for CallStack {
    fn call_stack(&self) -> Vec<CallerLocation> {
        self.frames.clone()
    }
}

impl LocationProvider for WorkingDirectory {
    fn call_stack(&self) -> Vec<CallerLocation> {
        vec![CallerLocation::top_level()]
    }
}

impl<T: LocationProvider + ?Sized> LocationProvider for &T {
    fn call_stack(&self) -> Vec<CallerLocation> {
        (**self).call_stack()
    }
}

/// Modules excluded from caller attribution.
///
/// `internal` modules are skipped outright. When the first remaining frame
/// belongs to an `introspection` module (reflection or documentation helpers
/// that touch the handle on nobody's behalf), discovery falls back to the
/// working directory instead of that helper's own location.
///
/// A module matches an entry when it equals it or is nested under it
/// (`entry::...`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipSet {
    internal: Vec<String>,
    introspection: Vec<String>,
}

impl Default for SkipSet {
    fn default() -> Self {
        Self {
            internal: vec![CRATE_MODULE.to_string()],
            introspection: Vec::new(),
        }
    }
}

impl SkipSet {
    /// A skip set with no entries, not even this crate.
    pub fn empty() -> Self {
        Self {
            internal: Vec::new(),
            introspection: Vec::new(),
        }
    }

    pub fn with_internal(mut self, module: impl Into<String>) -> Self {
        self.internal.push(module.into());
        self
    }

    pub fn with_introspection(mut self, module: impl Into<String>) -> Self {
        self.introspection.push(module.into());
        self
    }

    pub fn is_internal(&self, module: &str) -> bool {
        matches_any(&self.internal, module)
    }

    pub fn is_introspection(&self, module: &str) -> bool {
        matches_any(&self.introspection, module)
    }
}

fn matches_any(entries: &[String], module: &str) -> bool {
    entries.iter().any(|entry| {
        module
            .strip_prefix(entry.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
    })
}
