use serde::ser::{Serialize, SerializeTuple, Serializer};
use std::path::PathBuf;

use crate::constants::ENTRY_NAME_SEPARATOR;

/// A discovered entry file and the logical name the bundler knows it by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    /// `{appName}__{entryName}`
    pub name: String,
    pub path: PathBuf,
}

impl EntryRecord {
    pub fn new(app_name: &str, entry_name: &str, path: PathBuf) -> Self {
        Self { name: format!("{}{}{}", app_name, ENTRY_NAME_SEPARATOR, entry_name), path }
    }
}

// Bundler configs consume entries as `[name, path]` pairs.
impl Serialize for EntryRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.name)?;
        pair.serialize_element(&self.path)?;
        pair.end()
    }
}

/// Result of scanning a source directory for entry files.
///
/// `entries[i]` and `entry_dirs[i]` always describe the same entry file.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    pub entries: Vec<EntryRecord>,
    pub entry_dirs: Vec<PathBuf>,
}

impl Discovery {
    pub fn push(&mut self, record: EntryRecord, entry_dir: PathBuf) {
        self.entries.push(record);
        self.entry_dirs.push(entry_dir);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_record_name_joins_app_and_entry() {
        let record = EntryRecord::new("admin", "dashboard", PathBuf::from("/p/apps/admin/dashboard/entry.js"));
        assert_eq!(record.name, "admin__dashboard");
    }

    #[test]
    fn test_entry_record_serializes_as_pair() {
        let record = EntryRecord::new("site", "home", PathBuf::from("/p/apps/site/home/entry.js"));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!(["site__home", "/p/apps/site/home/entry.js"]));
    }

    #[test]
    fn test_discovery_push_keeps_indexes_aligned() {
        let mut discovery = Discovery::default();
        assert!(discovery.is_empty());

        discovery.push(
            EntryRecord::new("a", "x", PathBuf::from("/p/a/x/entry.js")),
            PathBuf::from("/p/a/x"),
        );
        discovery.push(
            EntryRecord::new("a", "y", PathBuf::from("/p/a/y/entry.js")),
            PathBuf::from("/p/a/y"),
        );

        assert_eq!(discovery.len(), 2);
        assert_eq!(discovery.entry_dirs.len(), discovery.entries.len());
        assert_eq!(discovery.entries[1].path.parent().unwrap(), discovery.entry_dirs[1]);
    }
}
