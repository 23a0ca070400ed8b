//! Core path utilities for assetpaths.
//!
//! This crate provides the building blocks used to describe a multi-app
//! frontend project to a bundler:
//! - Resolving the project root and paths relative to it
//! - Resolving paths relative to the resolver's own install location
//! - Turning `NODE_PATH` into a list of module search paths
//! - Discovering per-app `entry.js` files under a source directory

mod collector;
mod constants;
mod resolver;
mod search_paths;
mod types;

// Re-export public API
pub use collector::discover_entries;
pub use constants::{ENTRY_FILE_NAME, ENTRY_NAME_SEPARATOR, NODE_PATH_VAR, PATH_LIST_SEPARATOR};
pub use resolver::ProjectPaths;
pub use search_paths::compute_search_paths;
pub use types::{Discovery, EntryRecord};
