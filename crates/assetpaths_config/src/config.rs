use clap::Parser;
use log::{debug, warn};
use std::{
    env,
    path::{Path, PathBuf},
};

use assetpaths_core::NODE_PATH_VAR;

pub(crate) const DEFAULT_SOURCE_PATH: &str = "apps";
pub(crate) const DEFAULT_BUILD_PATH: &str = "public/assets";
pub(crate) const DEFAULT_PUBLIC_PATH: &str = "/assets/";

#[derive(Debug, Clone, Parser)]
#[command(name = "assetpaths")]
#[command(about = "Resolve build paths and app entry points for a multi-app frontend project")]
pub struct Config {
    /// Directory holding one subdirectory per app (default: apps)
    #[arg(long, value_name = "PATH")]
    pub source_path: Option<PathBuf>,

    /// Directory the bundler writes to (default: public/assets)
    #[arg(long, value_name = "PATH")]
    pub build_path: Option<PathBuf>,

    /// URL prefix the built assets are served from (default: /assets/)
    #[arg(long, value_name = "URL")]
    pub public_path: Option<String>,
}

impl Config {
    pub fn source_path(&self) -> &Path {
        non_empty_path(&self.source_path).unwrap_or(Path::new(DEFAULT_SOURCE_PATH))
    }

    pub fn build_path(&self) -> &Path {
        non_empty_path(&self.build_path).unwrap_or(Path::new(DEFAULT_BUILD_PATH))
    }

    pub fn public_path(&self) -> &str {
        self.public_path.as_deref().filter(|p| !p.is_empty()).unwrap_or(DEFAULT_PUBLIC_PATH)
    }
}

// An empty value falls back to the default, same as an absent one.
fn non_empty_path(path: &Option<PathBuf>) -> Option<&Path> {
    path.as_deref().filter(|p| !p.as_os_str().is_empty())
}

/// Process inputs other than arguments that the paths config depends on.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Raw `NODE_PATH` value, if set
    pub node_path: Option<String>,
    /// Directory containing the resolver executable
    pub own_dir: PathBuf,
}

impl Environment {
    /// Read `NODE_PATH` and locate the running executable.
    ///
    /// A non-unicode `NODE_PATH` is treated as unset. If the executable
    /// cannot be located, the own directory is left empty, which anchors the
    /// own root one level above the project root.
    pub fn from_process() -> Self {
        let node_path = node_path_value(env::var(NODE_PATH_VAR));
        debug!("{}={:?}", NODE_PATH_VAR, node_path);

        let own_dir = match env::current_exe() {
            Ok(exe) => exe.parent().map(Path::to_path_buf).unwrap_or_default(),
            Err(e) => {
                warn!("Could not locate the assetpaths executable: {}", e);
                PathBuf::new()
            }
        };
        debug!("Own directory: {:?}", own_dir);

        Self { node_path, own_dir }
    }
}

fn node_path_value(value: Result<String, env::VarError>) -> Option<String> {
    match value {
        Ok(value) => Some(value),
        Err(env::VarError::NotPresent) => None,
        Err(env::VarError::NotUnicode(_)) => {
            warn!("Ignoring {} because it is not valid unicode", NODE_PATH_VAR);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_no_arguments() {
        let cfg = Config::try_parse_from(["assetpaths"]).unwrap();
        assert_eq!(cfg.source_path(), Path::new("apps"));
        assert_eq!(cfg.build_path(), Path::new("public/assets"));
        assert_eq!(cfg.public_path(), "/assets/");
    }

    #[test]
    fn test_equals_and_space_separated_forms() {
        let cfg = Config::try_parse_from([
            "assetpaths",
            "--source-path=src/apps",
            "--build-path",
            "dist",
            "--public-path=/static/",
        ])
        .unwrap();
        assert_eq!(cfg.source_path(), Path::new("src/apps"));
        assert_eq!(cfg.build_path(), Path::new("dist"));
        assert_eq!(cfg.public_path(), "/static/");
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let cfg = Config::try_parse_from(["assetpaths", "--public-path="]).unwrap();
        assert_eq!(cfg.public_path(), "/assets/");

        let cfg = Config {
            source_path: Some(PathBuf::new()),
            build_path: Some(PathBuf::new()),
            public_path: None,
        };
        assert_eq!(cfg.source_path(), Path::new("apps"));
        assert_eq!(cfg.build_path(), Path::new("public/assets"));
    }

    #[test]
    fn test_unknown_argument_is_rejected() {
        assert!(Config::try_parse_from(["assetpaths", "--watch"]).is_err());
    }

    #[test]
    fn test_node_path_value_set_and_unset() {
        assert_eq!(node_path_value(Ok("src:lib".to_string())), Some("src:lib".to_string()));
        assert_eq!(node_path_value(Err(env::VarError::NotPresent)), None);
    }

    #[test]
    fn test_node_path_value_non_unicode_is_unset() {
        let raw = std::ffi::OsString::from("src");
        assert_eq!(node_path_value(Err(env::VarError::NotUnicode(raw))), None);
    }

    #[test]
    fn test_environment_from_process_locates_executable() {
        let env = Environment::from_process();
        assert!(env.own_dir.is_absolute());
    }
}
