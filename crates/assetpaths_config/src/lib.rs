//! Build-path configuration for multi-app frontend projects.
//!
//! This crate turns command-line arguments, the `NODE_PATH` environment
//! variable and the current directory into a [`PathsConfig`]: the flat set of
//! paths a bundler configuration needs (build output, source root, discovered
//! app entries, module search paths, ...).
//!
//! # Examples
//!
//! ```no_run
//! use assetpaths_config::{Environment, build};
//!
//! # fn main() -> anyhow::Result<()> {
//! let env = Environment::from_process();
//! let cwd = std::env::current_dir()?;
//! let paths = build(["assetpaths", "--build-path", "dist"], &env, &cwd)?;
//!
//! for entry in &paths.app_entries {
//!     println!("{} -> {}", entry.name, entry.path.display());
//! }
//! # Ok(())
//! # }
//! ```

mod builder;
mod config;
mod reporter;
mod types;

// Re-export public API
pub use builder::{build, build_from_config};
pub use config::{Config, Environment};
pub use reporter::{print_entries, write_json};
pub use types::PathsConfig;
