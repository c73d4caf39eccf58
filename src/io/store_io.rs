use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::model::{Entry, EntryId, EntryStore, Priority};

/// Error type for list file I/O
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("could not parse list file: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("io error: {0}")]
    IoError(#[from] io::Error),
}

/// Load a list file, normalizing anything unusable to the placeholder list.
///
/// A missing, empty, or malformed file is replaced on disk by a single
/// "Example Entry". This never fails; a failed write-back is only logged.
pub fn load(path: &Path) -> EntryStore {
    match read_store(path) {
        Ok(store) if !store.is_empty() => {
            tracing::debug!(path = %path.display(), entries = store.len(), "loaded list");
            return store;
        }
        Ok(_) => tracing::info!(path = %path.display(), "list is empty, writing placeholder"),
        Err(StoreError::ReadError { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "list file missing, creating it")
        }
        Err(e) => tracing::warn!(path = %path.display(), "replacing unreadable list: {e}"),
    }

    let store = EntryStore::with_placeholder(EntryId::now());
    if let Err(e) = persist(path, &store) {
        tracing::warn!("could not write placeholder list: {e}");
    }
    store
}

/// Read and parse a list file without any recovery
pub fn read_store(path: &Path) -> Result<EntryStore, StoreError> {
    let text = fs::read_to_string(path).map_err(|e| StoreError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    if text.trim().is_empty() {
        return Ok(EntryStore::new());
    }
    let stored: IndexMap<EntryId, StoredEntry> = serde_json::from_str(&text)?;

    let mut store = EntryStore::new();
    for (id, raw) in stored {
        let priority = Priority::new(raw.priority).unwrap_or_else(|e| {
            let clamped = Priority::clamped(raw.priority);
            tracing::warn!(path = %path.display(), %id, "{e}, using {clamped}");
            clamped
        });
        let mut entry = Entry::new(raw.text, priority);
        entry.completed = raw.completed;
        store.upsert(id, entry);
    }
    Ok(store)
}

/// An entry as written in the file. The priority is range-checked after
/// parsing so one bad value does not make the whole list unreadable.
#[derive(Deserialize)]
struct StoredEntry {
    text: String,
    priority: i64,
    completed: bool,
}

/// Serialize the whole store and replace the file with it
pub fn persist(path: &Path, store: &EntryStore) -> Result<(), StoreError> {
    let content = to_json(store)?;
    atomic_write(path, &content).map_err(|e| StoreError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Pretty JSON with four-space indentation
pub fn to_json(store: &EntryStore) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    store.serialize(&mut ser)?;
    Ok(buf)
}

/// Write via a temp file in the same directory, then rename over the target.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_store() -> EntryStore {
        let mut store = EntryStore::new();
        store.upsert(
            EntryId::new("1700000000"),
            Entry::new("Water plants", Priority::new(3).unwrap()),
        );
        let mut done = Entry::new("File taxes", Priority::new(9).unwrap());
        done.completed = true;
        store.upsert(EntryId::new("1700000100"), done);
        store
    }

    fn assert_placeholder(store: &EntryStore) {
        assert_eq!(store.len(), 1);
        let (_, entry) = store.iter().next().unwrap();
        assert_eq!(entry, &Entry::placeholder());
    }

    #[test]
    fn missing_file_is_created_with_placeholder() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.json");

        let store = load(&path);
        assert_placeholder(&store);
        assert_eq!(read_store(&path).unwrap(), store);
    }

    #[test]
    fn empty_object_is_replaced_and_written_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.json");
        fs::write(&path, "{}").unwrap();

        let store = load(&path);
        assert_placeholder(&store);
        let on_disk = read_store(&path).unwrap();
        assert_placeholder(&on_disk);
    }

    #[test]
    fn blank_file_is_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.json");
        fs::write(&path, "  \n").unwrap();

        assert_placeholder(&load(&path));
        assert_placeholder(&read_store(&path).unwrap());
    }

    #[test]
    fn malformed_json_is_replaced_silently() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.json");
        fs::write(&path, "not json {{{").unwrap();

        assert_placeholder(&load(&path));
        assert_placeholder(&read_store(&path).unwrap());
    }

    #[test]
    fn out_of_range_priority_is_clamped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.json");
        fs::write(
            &path,
            r#"{"1": {"text": "low", "priority": 0, "completed": false}}"#,
        )
        .unwrap();

        let store = read_store(&path).unwrap();
        assert_eq!(store.get(&EntryId::new("1")).unwrap().priority.get(), 1);
        assert_eq!(load(&path), store);
    }

    #[test]
    fn one_bad_priority_keeps_the_other_entries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.json");
        fs::write(
            &path,
            r#"{
                "1": {"text": "Pay rent", "priority": 8, "completed": false},
                "2": {"text": "Buy milk", "priority": 11, "completed": true}
            }"#,
        )
        .unwrap();

        let store = load(&path);
        let texts: Vec<&str> = store.iter().map(|(_, e)| e.text.as_str()).collect();
        assert_eq!(texts, vec!["Pay rent", "Buy milk"]);
        let milk = store.get(&EntryId::new("2")).unwrap();
        assert_eq!(milk.priority.get(), 10);
        assert!(milk.completed);

        // The file is left as it was, not replaced by the placeholder
        let on_disk = fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains("Pay rent"));
        assert!(!on_disk.contains(Entry::PLACEHOLDER_TEXT));
    }

    #[test]
    fn wrong_field_type_counts_as_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.json");
        fs::write(
            &path,
            r#"{"1": {"text": "bad", "priority": "high", "completed": false}}"#,
        )
        .unwrap();

        assert!(read_store(&path).is_err());
        assert_placeholder(&load(&path));
    }

    #[test]
    fn persist_then_load_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("list.json");
        persist(&path, &sample_store()).unwrap();
        let first_bytes = fs::read(&path).unwrap();

        let loaded = load(&path);
        persist(&path, &loaded).unwrap();
        let second_bytes = fs::read(&path).unwrap();

        assert_eq!(loaded, sample_store());
        assert_eq!(load(&path), loaded);
        assert_eq!(first_bytes, second_bytes);
    }

    #[test]
    fn persist_uses_four_space_indent() {
        let mut store = EntryStore::new();
        store.upsert(
            EntryId::new("1"),
            Entry::new("Buy milk", Priority::new(2).unwrap()),
        );
        let json = String::from_utf8(to_json(&store).unwrap()).unwrap();
        assert_eq!(
            json,
            "{\n    \"1\": {\n        \"text\": \"Buy milk\",\n        \"priority\": 2,\n        \"completed\": false\n    }\n}"
        );
    }

    #[test]
    fn persist_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("list.json");
        let err = persist(&path, &sample_store()).unwrap_err();
        assert!(matches!(err, StoreError::WriteError { .. }));
    }
}
