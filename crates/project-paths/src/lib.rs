//! Access paths declared in a project's configuration file
//!
//! Declare named paths in the nearest `pyproject.toml`:
//!
//! ```toml
//! [tool.project-paths]
//! tests = "path/to/my/tests/"
//! docs = "path/to/my/docs/"
//! absolute = "/opt/absolute/path"
//! ```
//!
//! and look them up from code. Relative entries resolve against the
//! directory holding the configuration file, and the configuration file is
//! the one nearest to the *calling* source file:
//!
//! ```no_run
//! use project_paths::{paths, project_root};
//!
//! let docs = paths!("docs")?;
//! let readme = docs.join("README.md");
//! let all = paths!()?;
//! for (name, path) in &all {
//!     println!("{name} = {}", path.display());
//! }
//! let manifest = project_root!("pyproject.toml")?;
//! # Ok::<(), project_paths::Error>(())
//! ```

pub mod config;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod handle;
pub mod location;
pub mod logging;
mod macros;
pub mod paths;
pub mod resolver;

pub use config::Options;
pub use discovery::{find_caller_relative_configuration, locate_configuration, starting_directory};
pub use error::{Error, Result};
pub use handle::{PATHS, PROJECT_ROOT, ProjectPaths, ProjectRoot};
pub use location::{CallStack, CallerLocation, LocationProvider, SkipSet, WorkingDirectory};
pub use paths::{Diagnostic, ResolvedPaths};
pub use resolver::{resolve, resolve_with};
