use log::{debug, trace};
use std::path::{Path, PathBuf};

use crate::resolver::ProjectPaths;

/// Turn a `NODE_PATH`-style list into absolute module search paths.
///
/// Only relative segments are honored; absolute ones are dropped so a
/// project cannot shadow platform module locations. Empty segments are
/// skipped. Order is preserved and duplicates are kept.
pub fn compute_search_paths(
    env_value: &str,
    separator: char,
    paths: &ProjectPaths,
) -> Vec<PathBuf> {
    let search_paths: Vec<PathBuf> = env_value
        .split(separator)
        .filter(|segment| !segment.is_empty())
        .filter(|segment| {
            let absolute = Path::new(segment).is_absolute();
            if absolute {
                trace!("Ignoring absolute search path: {}", segment);
            }
            !absolute
        })
        .map(|segment| paths.resolve_app(segment))
        .collect();

    debug!("Computed {} search paths", search_paths.len());
    search_paths
}
