//! Notes persistence
//!
//! The whole collection is one JSON array of strings, rewritten in full on
//! every append.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Durable home of the student notes
pub trait NoteStore {
    /// Read the full collection. A store that has never been written is empty.
    fn load(&self) -> Result<Vec<String>, StorageError>;

    /// Replace the full collection
    fn save(&self, notes: &[String]) -> Result<(), StorageError>;
}

/// Notes kept in a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NoteStore for JsonFileStore {
    fn load(&self) -> Result<Vec<String>, StorageError> {
        if !self.path.exists() {
            log::debug!("No notes file at {}", self.path.display());
            return Ok(Vec::new());
        }

        let json = std::fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;
        let notes: Vec<String> =
            serde_json::from_str(&json).map_err(|source| StorageError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        log::info!("Loaded {} notes from {}", notes.len(), self.path.display());
        Ok(notes)
    }

    fn save(&self, notes: &[String]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(notes)?;
        std::fs::write(&self.path, json).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;
        log::info!("Notes saved ({} entries)", notes.len());
        Ok(())
    }
}

/// In-process store for headless runs and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    notes: RefCell<Vec<String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<String>) -> Self {
        Self {
            notes: RefCell::new(notes),
            fail_writes: Cell::new(false),
        }
    }

    /// Make subsequent saves fail with `StorageError::Unavailable`
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.notes.borrow().clone()
    }
}

impl NoteStore for MemoryStore {
    fn load(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.snapshot())
    }

    fn save(&self, notes: &[String]) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Unavailable);
        }
        *self.notes.borrow_mut() = notes.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("planete-store-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join("student_notes.json")
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let store = JsonFileStore::new(temp_path("missing"));
        let _ = std::fs::remove_file(store.path());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let store = JsonFileStore::new(temp_path("malformed"));
        std::fs::write(store.path(), r#"{"not": "an array"}"#).unwrap();
        assert!(matches!(store.load(), Err(StorageError::Malformed { .. })));
    }

    #[test]
    fn test_save_keeps_unicode_unescaped() {
        let store = JsonFileStore::new(temp_path("unicode"));
        let notes = vec!["Ploaie pe Venus? Nu, acid sulfuric!".to_string(), "Temperatura: 427°C".to_string()];
        store.save(&notes).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("427°C"));
        assert!(raw.contains("\n  \""));
        assert_eq!(store.load().unwrap(), notes);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let store = JsonFileStore::new(temp_path("nodir").join("nested").join("notes.json"));
        let result = store.save(&["x".to_string()]);
        assert!(matches!(result, Err(StorageError::Write { .. })));
    }

    #[test]
    fn test_memory_store_failing_writes() {
        let store = MemoryStore::with_notes(vec!["a".to_string()]);
        store.set_fail_writes(true);
        assert!(matches!(store.save(&[]), Err(StorageError::Unavailable)));
        assert_eq!(store.snapshot(), vec!["a".to_string()]);
    }
}
