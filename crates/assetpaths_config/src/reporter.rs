use std::{
    io::{self, Write},
    path::{Component, Path, PathBuf},
};

use colored::Colorize;
use log::{debug, trace};

use assetpaths_core::{ENTRY_NAME_SEPARATOR, EntryRecord};

use crate::types::PathsConfig;

/// Write the paths config as pretty-printed JSON.
pub fn write_json<W: Write>(writer: &mut W, cfg: &PathsConfig) -> io::Result<()> {
    debug!("Writing paths config as JSON");
    serde_json::to_writer_pretty(&mut *writer, cfg)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Print discovered entries grouped by app, with paths relative to the
/// project root.
pub fn print_entries<W: Write>(writer: &mut W, cfg: &PathsConfig) -> io::Result<()> {
    let src_display = display_path(&cfg.app_path, &cfg.app_src);

    if cfg.app_entries.is_empty() {
        debug!("No entries to print");
        writeln!(writer, "{} No entries found in {}", "⚠".yellow().bold(), src_display.blue())?;
        writer.flush()?;
        return Ok(());
    }

    let groups = group_by_app(&cfg.app_src, &cfg.app_entries);
    debug!("Printing {} entries in {} apps", cfg.app_entries.len(), groups.len());

    writeln!(
        writer,
        "{} Found {} entries in {} apps under {}\n",
        "●".bright_blue(),
        cfg.app_entries.len().to_string().cyan(),
        groups.len().to_string().cyan(),
        src_display.blue()
    )?;

    for (app, entries) in &groups {
        writeln!(writer, "{} ({} entries)", app.bright_white().bold(), entries.len())?;

        for (idx, entry) in entries.iter().enumerate() {
            let is_last = idx == entries.len() - 1;
            let prefix = if is_last { "└──" } else { "├──" };
            writeln!(
                writer,
                "{}  {}  {}",
                prefix.dimmed(),
                entry.name.green(),
                display_path(&cfg.app_path, &entry.path).blue()
            )?;
        }

        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

// Entries arrive app by app, so grouping only has to watch for the app changing.
fn group_by_app<'a>(app_src: &Path, entries: &'a [EntryRecord]) -> Vec<(String, Vec<&'a EntryRecord>)> {
    let mut groups: Vec<(String, Vec<&EntryRecord>)> = Vec::new();
    for entry in entries {
        let app = app_name(app_src, entry);
        match groups.last_mut() {
            Some((last, members)) if *last == app => members.push(entry),
            _ => groups.push((app, vec![entry])),
        }
    }
    groups
}

fn app_name(app_src: &Path, entry: &EntryRecord) -> String {
    if let Ok(rel) = entry.path.strip_prefix(app_src)
        && let Some(Component::Normal(first)) = rel.components().next()
    {
        return first.to_string_lossy().to_string();
    }
    trace!("Entry {} is outside {}, using its name", entry.path.display(), app_src.display());
    entry.name.split(ENTRY_NAME_SEPARATOR).next().unwrap_or_default().to_string()
}

fn display_path(root: &Path, path: &Path) -> String {
    match make_relative(path, root) {
        Some(rel) => rel.to_string_lossy().to_string(),
        None => path.to_string_lossy().to_string(),
    }
}

/// Create a relative path from `base` to `target`
fn make_relative(target: &Path, base: &Path) -> Option<PathBuf> {
    let mut target_components = target.components().peekable();
    let mut base_components = base.components().peekable();

    // Paths on different roots (e.g. Windows drives) have no relative form
    if target_components.peek() != base_components.peek() {
        return None;
    }

    while let (Some(t), Some(b)) = (target_components.peek(), base_components.peek()) {
        if t != b {
            break;
        }
        target_components.next();
        base_components.next();
    }

    let mut result = PathBuf::new();
    for _ in base_components {
        result.push("..");
    }
    for component in target_components {
        match component {
            Component::Normal(p) => result.push(p),
            Component::ParentDir => result.push(".."),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    if result.as_os_str().is_empty() { Some(PathBuf::from(".")) } else { Some(result) }
}
