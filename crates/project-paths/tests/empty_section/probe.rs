//! Caller whose configuration lacks the `[tool.project-paths]` table.

use project_paths::{CallerLocation, PATHS, Result, here};

pub fn location() -> CallerLocation {
    here!()
}

pub fn len() -> Result<usize> {
    PATHS.len(&here!())
}
