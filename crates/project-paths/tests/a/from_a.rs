//! Caller owned by `a/pyproject.toml`.

use std::path::PathBuf;

use project_paths::{CallerLocation, ResolvedPaths, Result, here, paths, project_root};

pub fn location() -> CallerLocation {
    here!()
}

pub fn filename() -> Result<PathBuf> {
    paths!("filename")
}

pub fn resolved() -> Result<ResolvedPaths> {
    paths!()
}

pub fn root() -> Result<PathBuf> {
    project_root!()
}
