use serde::Serialize;
use std::path::PathBuf;

use assetpaths_core::EntryRecord;

/// Every path a bundler configuration needs, resolved to absolute paths.
///
/// Serializes with camelCase keys (`appPath`, `appBuild`, ...), which is the
/// shape bundler configs read.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathsConfig {
    pub app_path: PathBuf,
    /// Location to build to
    pub app_build: PathBuf,
    pub app_package_json: PathBuf,
    pub app_webpack_config_dev: PathBuf,
    pub app_webpack_config_prod: PathBuf,
    pub app_src: PathBuf,
    pub app_entries: Vec<EntryRecord>,
    /// Parent directory of each entry, index-aligned with `app_entries`
    pub app_entry_dirs: Vec<PathBuf>,
    pub app_node_modules: PathBuf,
    /// Resolved relative `NODE_PATH` segments
    pub node_paths: Vec<PathBuf>,
    pub own_node_modules: PathBuf,
    /// URL prefix the built assets are served from
    pub public_path: String,
    pub yarn_lock_file: PathBuf,
}
