//! Well-known names used when discovering and reading the configuration file.

/// File searched for in the caller's directory and its ancestors.
pub const DEFAULT_FILE_NAME: &str = "pyproject.toml";

/// Table holding the path entries: `[tool.project-paths]`.
pub const DEFAULT_SECTION: [&str; 2] = ["tool", "project-paths"];

/// Keys starting with this prefix are reserved and never resolved.
pub const RESERVED_PREFIX: &str = "_";

/// Module identifier of a caller with no source file (a `main` entry point,
/// a REPL, a script runner). Such callers resolve from the working directory.
pub const TOP_LEVEL_MODULE: &str = "<top-level>";

/// Module path of this crate; frames inside it are never the caller.
pub const CRATE_MODULE: &str = env!("CARGO_CRATE_NAME");
