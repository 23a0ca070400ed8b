use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use std::{ffi::OsString, path::Path};

use assetpaths_core::{PATH_LIST_SEPARATOR, ProjectPaths, compute_search_paths, discover_entries};

use crate::{
    config::{Config, Environment},
    types::PathsConfig,
};

const PACKAGE_JSON: &str = "package.json";
const WEBPACK_CONFIG_DEV: &str = "webpack.config.dev.js";
const WEBPACK_CONFIG_PROD: &str = "webpack.config.prod.js";
const NODE_MODULES: &str = "node_modules";
const YARN_LOCK: &str = "yarn.lock";

/// Parse `argv` and build the paths config for the project at `cwd`.
///
/// `argv` starts with the program name, like [`std::env::args_os`].
pub fn build<I, T>(argv: I, env: &Environment, cwd: &Path) -> Result<PathsConfig>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cfg = Config::try_parse_from(argv)?;
    debug!("Parsed arguments: {:?}", cfg);
    build_from_config(&cfg, env, cwd)
}

pub fn build_from_config(cfg: &Config, env: &Environment, cwd: &Path) -> Result<PathsConfig> {
    info!("Building paths config");

    let paths = ProjectPaths::from_cwd(cwd, &env.own_dir)?;
    info!("Using project root: {}", paths.root().display());
    debug!("Own root: {}", paths.own_root().display());

    let app_src = paths.resolve_app(cfg.source_path());
    debug!("Source root: {}", app_src.display());
    let discovery = discover_entries(&app_src);
    info!("Found {} app entries", discovery.len());

    let node_paths = compute_search_paths(
        env.node_path.as_deref().unwrap_or_default(),
        PATH_LIST_SEPARATOR,
        &paths,
    );

    Ok(PathsConfig {
        app_path: paths.resolve_app("."),
        app_build: paths.resolve_app(cfg.build_path()),
        app_package_json: paths.resolve_app(PACKAGE_JSON),
        app_webpack_config_dev: paths.resolve_app(WEBPACK_CONFIG_DEV),
        app_webpack_config_prod: paths.resolve_app(WEBPACK_CONFIG_PROD),
        app_src,
        app_entries: discovery.entries,
        app_entry_dirs: discovery.entry_dirs,
        app_node_modules: paths.resolve_app(NODE_MODULES),
        node_paths,
        own_node_modules: paths.resolve_own(NODE_MODULES),
        public_path: cfg.public_path().to_string(),
        yarn_lock_file: paths.resolve_app(YARN_LOCK),
    })
}
