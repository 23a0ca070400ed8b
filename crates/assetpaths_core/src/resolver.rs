use anyhow::{Context, Result};
use log::{debug, trace};
use path_clean::clean;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// The two anchors every other path is resolved against.
///
/// `root` is the project being built, `own_root` is where the resolver itself
/// is installed. They differ when the resolver lives in the project's
/// `node_modules`.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    root: PathBuf,
    own_root: PathBuf,
}

impl ProjectPaths {
    /// Resolve the project root from `cwd`, following symlinks.
    ///
    /// `own_dir` is the directory containing the resolver; its parent becomes
    /// the own root. A relative `own_dir` is taken relative to the project root.
    ///
    /// Fails if `cwd` does not exist or cannot be read, since nothing else can
    /// be computed without a root.
    pub fn from_cwd(cwd: &Path, own_dir: &Path) -> Result<Self> {
        debug!("Resolving project root from: {}", cwd.display());
        let root = fs::canonicalize(cwd)
            .with_context(|| format!("Failed to resolve project root from {}", cwd.display()))?;
        trace!("Project root resolved to: {}", root.display());

        let own_root = clean(root.join(own_dir).join(".."));
        trace!("Own root resolved to: {}", own_root.display());

        Ok(Self { root, own_root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn own_root(&self) -> &Path {
        &self.own_root
    }

    /// Resolve a path against the project root. An empty path or `.` yields
    /// the root itself, an absolute path is returned as is (cleaned).
    pub fn resolve_app(&self, relative_path: impl AsRef<Path>) -> PathBuf {
        resolve_from(&self.root, relative_path.as_ref())
    }

    /// Resolve a path against the resolver's own install location.
    pub fn resolve_own(&self, relative_path: impl AsRef<Path>) -> PathBuf {
        resolve_from(&self.own_root, relative_path.as_ref())
    }
}

fn resolve_from(base: &Path, relative_path: &Path) -> PathBuf {
    let resolved = clean(base.join(relative_path));
    trace!("Resolved '{}' to {}", relative_path.display(), resolved.display());
    resolved
}
