//! Whole-document entry persistence

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use shiplog_core::error::StoreError;

use crate::entry::{Entry, Operation};

/// Durable store for changelog entries.
///
/// The backing document is a single JSON array. Every mutation reads the
/// entire document, applies one change, and writes the entire document back
/// as an atomic replacement; no file handle or in-memory cache survives
/// between calls. Entry identity is the wall-clock creation timestamp -
/// RFC 3339 sub-second precision makes collisions practically impossible
/// for a single-user tool.
#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
    strict: bool,
}

impl EntryStore {
    /// Create a store backed by the given document path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            strict: false,
        }
    }

    /// Fail on a malformed document instead of starting from an empty set
    pub fn with_strict_load(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all entries, sorted by timestamp descending (newest first).
    ///
    /// A missing document is an empty store, not an error. A document that
    /// exists but cannot be parsed is also treated as empty unless strict
    /// loading is enabled.
    pub fn load(&self) -> Result<Vec<Entry>, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no changelog document, starting empty");
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let mut entries: Vec<Entry> = match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(err) if self.strict => {
                return Err(StoreError::Malformed {
                    path: self.path.clone(),
                    reason: err.to_string(),
                });
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "malformed changelog document, starting from an empty set"
                );
                Vec::new()
            }
        };

        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }

    /// Append a new entry stamped with the current time.
    ///
    /// Returns the created entry so the caller can report its timestamp.
    #[instrument(skip(self, text), fields(path = %self.path.display()))]
    pub fn append(&self, operation: Operation, text: &str) -> Result<Entry, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }

        let mut entries = self.load()?;
        let entry = Entry::new(chrono::Utc::now().to_rfc3339(), operation, text);
        entries.push(entry.clone());
        self.save(&entries)?;

        info!(timestamp = %entry.timestamp, operation = %operation, "entry appended");
        Ok(entry)
    }

    /// Replace the operation and text of the entry with the given timestamp.
    ///
    /// The timestamp itself never changes. Only the first match is updated;
    /// timestamps are assumed unique.
    #[instrument(skip(self, text), fields(path = %self.path.display()))]
    pub fn update(
        &self,
        timestamp: &str,
        operation: Operation,
        text: &str,
    ) -> Result<Entry, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }

        let mut entries = self.load()?;
        let entry = entries
            .iter_mut()
            .find(|e| e.timestamp == timestamp)
            .ok_or_else(|| StoreError::EntryNotFound(timestamp.to_string()))?;

        entry.operation = operation;
        entry.text = text.to_string();
        let updated = entry.clone();
        self.save(&entries)?;

        info!(timestamp, operation = %operation, "entry updated");
        Ok(updated)
    }

    /// Remove every entry with the given timestamp.
    ///
    /// Returns the number of entries removed. The document is only
    /// rewritten when at least one entry matched.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn remove(&self, timestamp: &str) -> Result<usize, StoreError> {
        let entries = self.load()?;
        let kept: Vec<Entry> = entries
            .iter()
            .filter(|e| e.timestamp != timestamp)
            .cloned()
            .collect();

        let removed = entries.len() - kept.len();
        if removed == 0 {
            return Err(StoreError::EntryNotFound(timestamp.to_string()));
        }

        self.save(&kept)?;
        info!(timestamp, removed, "entry removed");
        Ok(removed)
    }

    /// Rewrite the whole document atomically.
    ///
    /// Four-space indentation matches the documents the legacy editor
    /// produced; serde_json leaves non-ASCII text verbatim.
    fn save(&self, entries: &[Entry]) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        entries.serialize(&mut ser)?;

        write_atomic(&self.path, &buf)?;
        debug!(path = %self.path.display(), bytes = buf.len(), count = entries.len(), "document saved");
        Ok(())
    }
}

/// Write to a temp file in the destination directory, then rename over the
/// destination, so readers never observe a partially written document.
fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> EntryStore {
        EntryStore::new(dir.path().join("changelog.json"))
    }

    #[test]
    fn test_load_missing_document_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let before = Utc::now();
        let entry = store.append(Operation::Created, "Initial release").unwrap();

        let entries = store.load().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Created);
        assert_eq!(entries[0].text, "Initial release");

        let stamped: DateTime<Utc> = entries[0].timestamp.parse().unwrap();
        assert!(stamped >= before && stamped <= Utc::now());
        assert_eq!(entries[0].timestamp, entry.timestamp);
    }

    #[test]
    fn test_append_rejects_empty_text() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.append(Operation::Created, "keep me").unwrap();

        let before = store.load().unwrap();
        assert!(matches!(
            store.append(Operation::Edited, ""),
            Err(StoreError::EmptyText)
        ));
        assert!(matches!(
            store.append(Operation::Edited, "   "),
            Err(StoreError::EmptyText)
        ));
        assert_eq!(store.load().unwrap(), before);
    }

    #[test]
    fn test_append_trims_text() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.append(Operation::Created, "  padded  \n").unwrap();
        assert_eq!(store.load().unwrap()[0].text, "padded");
    }

    #[test]
    fn test_load_sorts_newest_first() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.append(Operation::Created, "first").unwrap();
        store.append(Operation::Edited, "second").unwrap();
        store.append(Operation::Deleted, "third").unwrap();

        let entries = store.load().unwrap();
        let texts: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["third", "second", "first"]);
        assert!(entries[0].timestamp > entries[1].timestamp);
        assert!(entries[1].timestamp > entries[2].timestamp);

        // Load is idempotent without intervening mutation.
        assert_eq!(store.load().unwrap(), entries);
    }

    #[test]
    fn test_update_replaces_operation_and_text_only() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.append(Operation::Created, "one").unwrap();
        let target = store.append(Operation::Created, "two").unwrap();
        store.append(Operation::Created, "three").unwrap();

        store
            .update(&target.timestamp, Operation::Edited, "two, revised")
            .unwrap();

        let entries = store.load().unwrap();
        let updated = entries
            .iter()
            .find(|e| e.timestamp == target.timestamp)
            .unwrap();
        assert_eq!(updated.operation, Operation::Edited);
        assert_eq!(updated.text, "two, revised");

        let others: Vec<&str> = entries
            .iter()
            .filter(|e| e.timestamp != target.timestamp)
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(others, vec!["three", "one"]);
    }

    #[test]
    fn test_update_unknown_timestamp_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.append(Operation::Created, "only").unwrap();

        let before = store.load().unwrap();
        let result = store.update("2001-01-01T00:00:00+00:00", Operation::Edited, "nope");
        assert!(matches!(result, Err(StoreError::EntryNotFound(_))));
        assert_eq!(store.load().unwrap(), before);
    }

    #[test]
    fn test_update_rejects_empty_text() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let entry = store.append(Operation::Created, "keep").unwrap();

        let result = store.update(&entry.timestamp, Operation::Edited, "  ");
        assert!(matches!(result, Err(StoreError::EmptyText)));
        assert_eq!(store.load().unwrap()[0].text, "keep");
    }

    #[test]
    fn test_remove_middle_entry() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.append(Operation::Created, "one").unwrap();
        let middle = store.append(Operation::Edited, "two").unwrap();
        store.append(Operation::Deleted, "three").unwrap();

        assert_eq!(store.remove(&middle.timestamp).unwrap(), 1);

        let entries = store.load().unwrap();
        let texts: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["three", "one"]);
    }

    #[test]
    fn test_remove_unknown_timestamp_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.append(Operation::Created, "one").unwrap();
        store.append(Operation::Edited, "two").unwrap();
        store.append(Operation::Deleted, "three").unwrap();

        let before = store.load().unwrap();
        let result = store.remove("2001-01-01T00:00:00+00:00");
        assert!(matches!(result, Err(StoreError::EntryNotFound(_))));
        assert_eq!(store.load().unwrap(), before);
    }

    #[test]
    fn test_malformed_document_loads_empty_by_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("changelog.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = EntryStore::new(&path);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_document_errors_in_strict_mode() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("changelog.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = EntryStore::new(&path).with_strict_load(true);
        assert!(matches!(store.load(), Err(StoreError::Malformed { .. })));
    }

    #[test]
    fn test_document_is_indented_and_keeps_unicode_verbatim() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.append(Operation::Created, "héllo — 世界").unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("    \"timestamp\""));
        assert!(content.contains("héllo — 世界"));
        assert!(!content.contains("\\u"));
    }

    #[test]
    fn test_concrete_lifecycle_scenario() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let created = store.append(Operation::Created, "Initial release").unwrap();
        let entries = store.load().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Created);
        assert_eq!(entries[0].text, "Initial release");

        store.append(Operation::Edited, "Fixed typo").unwrap();
        let entries = store.load().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Edited);

        store.remove(&created.timestamp).unwrap();
        let entries = store.load().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Edited);
        assert_eq!(entries[0].text, "Fixed typo");
    }
}
