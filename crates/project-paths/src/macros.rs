//! Macros capturing the caller's location at the call site

/// The [`CallerLocation`](crate::CallerLocation) of the code invoking the macro.
///
/// Records `module_path!()`, `file!()` and the invoking crate's
/// `CARGO_MANIFEST_DIR`, all resolved where the macro is expanded.
#[macro_export]
macro_rules! here {
    () => {
        $crate::CallerLocation::from_static(module_path!(), file!(), env!("CARGO_MANIFEST_DIR"))
    };
}

/// Resolve the caller's configuration through [`PATHS`](crate::PATHS).
///
/// `paths!()` yields the whole [`ResolvedPaths`](crate::ResolvedPaths);
/// `paths!("name")` yields the single path declared under `name`.
#[macro_export]
macro_rules! paths {
    () => {
        $crate::PATHS.resolve(&$crate::here!())
    };
    ($name:expr) => {
        $crate::PATHS.get(&$crate::here!(), $name)
    };
}

/// The caller's project root through [`PROJECT_ROOT`](crate::PROJECT_ROOT),
/// optionally joined with a segment.
#[macro_export]
macro_rules! project_root {
    () => {
        $crate::PROJECT_ROOT.path(&$crate::here!())
    };
    ($segment:expr) => {
        $crate::PROJECT_ROOT.join(&$crate::here!(), $segment)
    };
}
