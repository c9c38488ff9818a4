//! Caller whose configuration declares a reserved `_paths` entry.

use project_paths::{ResolvedPaths, Result, paths};

pub fn resolved() -> Result<ResolvedPaths> {
    paths!()
}
