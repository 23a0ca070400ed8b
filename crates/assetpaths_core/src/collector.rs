use ignore::{DirEntry, WalkBuilder};
use log::{debug, trace, warn};
use std::path::{Path, PathBuf};

use crate::{
    constants::ENTRY_FILE_NAME,
    types::{Discovery, EntryRecord},
};

/// Find every `entry.js` below each app directory of `source_root`.
///
/// Each immediate child directory of `source_root` is an app. Every
/// `entry.js` found at any depth inside an app becomes an [`EntryRecord`]
/// named `{app}__{dir}`, where `dir` is the directory holding the file.
///
/// Apps and walk results are visited in file-name order so the output is
/// stable across filesystems. Hidden files and directories are skipped and
/// ignore files are not consulted. A missing source root yields an empty
/// [`Discovery`].
pub fn discover_entries(source_root: &Path) -> Discovery {
    debug!("Discovering entries under: {}", source_root.display());
    let mut discovery = Discovery::default();

    if !source_root.is_dir() {
        debug!("Source root {} is not a directory, no entries", source_root.display());
        return discovery;
    }

    for app_dir in app_dirs(source_root) {
        let Some(app_name) = file_name(&app_dir) else {
            continue;
        };
        trace!("Scanning app '{}' at {}", app_name, app_dir.display());

        for entry_file in entry_files(&app_dir) {
            let Some(entry_dir) = entry_file.parent().map(Path::to_path_buf) else {
                continue;
            };
            let entry_name = file_name(&entry_dir).unwrap_or_default();

            let record = EntryRecord::new(&app_name, &entry_name, entry_file);
            trace!("Found entry '{}': {}", record.name, record.path.display());
            discovery.push(record, entry_dir);
        }
    }

    debug!("Discovered {} entries", discovery.len());
    discovery
}

fn walker(root: &Path) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(true)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));
    builder
}

fn app_dirs(source_root: &Path) -> Vec<PathBuf> {
    let walker = walker(source_root).max_depth(Some(1)).build();

    walk_entries(walker, source_root)
        .filter(|dent| dent.depth() == 1 && dent.path().is_dir())
        .map(|dent| dent.into_path())
        .collect()
}

fn entry_files(app_dir: &Path) -> Vec<PathBuf> {
    let walker = walker(app_dir).build();

    walk_entries(walker, app_dir)
        .filter(|dent| dent.depth() > 0)
        // Symlinked entry files count; symlinked directories are not descended into
        .filter(|dent| dent.path().is_file())
        .filter(|dent| dent.file_name() == ENTRY_FILE_NAME)
        .map(|dent| dent.into_path())
        .collect()
}

fn walk_entries(walker: ignore::Walk, root: &Path) -> impl Iterator<Item = DirEntry> {
    let root = root.to_path_buf();
    walker.filter_map(move |res| match res {
        Ok(dent) => Some(dent),
        Err(e) => {
            warn!("Skipping unreadable path under {}: {}", root.display(), e);
            None
        }
    })
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}
