//! File-based snapshot storage
//!
//! Each slot is a JSON file named `<slot>.json` inside a data directory.
//! Writes go to `<slot>.json.tmp` first and are renamed over the slot, so a
//! torn write never replaces the previous snapshot.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use super::SnapshotStorage;
use crate::Result;

/// Slot storage backed by a directory on disk
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Directory holding the slot files
    dir: PathBuf,
}

impl FileStorage {
    /// Create a new FileStorage
    ///
    /// The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing a slot
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }

    fn temp_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json.tmp"))
    }
}

impl SnapshotStorage for FileStorage {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, slot: &str, contents: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let temp_path = self.temp_path(slot);
        let mut file = File::create(&temp_path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&temp_path, self.slot_path(slot))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_slot() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path());

        assert!(storage.read("todos").unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path());

        storage.write("todos", "[]").unwrap();
        assert_eq!(storage.read("todos").unwrap().as_deref(), Some("[]"));
        assert!(temp.path().join("todos.json").exists());
    }

    #[test]
    fn test_write_creates_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("data");
        let mut storage = FileStorage::new(&dir);

        storage.write("todos", "[]").unwrap();
        assert!(dir.join("todos.json").exists());
    }

    #[test]
    fn test_write_overwrites() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path());

        storage.write("todos", "[1]").unwrap();
        storage.write("todos", "[]").unwrap();
        assert_eq!(storage.read("todos").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path());

        storage.write("todos", "[]").unwrap();
        assert!(!temp.path().join("todos.json.tmp").exists());
    }

    #[test]
    fn test_failed_write_keeps_previous_snapshot() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path());
        storage.write("todos", "[\"previous\"]").unwrap();

        // A directory in the temp file's place makes the next write fail
        // before the slot is touched.
        fs::create_dir(temp.path().join("todos.json.tmp")).unwrap();
        assert!(storage.write("todos", "[\"next\"]").is_err());

        assert_eq!(
            storage.read("todos").unwrap().as_deref(),
            Some("[\"previous\"]")
        );
    }

    #[test]
    fn test_stale_temp_file_is_ignored_and_replaced() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path());
        storage.write("todos", "[]").unwrap();

        // Leftover from a write that died halfway
        fs::write(temp.path().join("todos.json.tmp"), "[{\"id\":").unwrap();
        assert_eq!(storage.read("todos").unwrap().as_deref(), Some("[]"));

        storage.write("todos", "[1]").unwrap();
        assert_eq!(storage.read("todos").unwrap().as_deref(), Some("[1]"));
        assert!(!temp.path().join("todos.json.tmp").exists());
    }
}
