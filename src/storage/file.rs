//! File Storage Backend
//!
//! Maps each slot to one JSON file under a base directory. This is the
//! durable backend used outside of tests, standing in for what a browser
//! would keep in persistent page storage.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::storage::StorageBackend;

// == File Store ==
/// Slot store persisting each slot as `<dir>/<name>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`.
    ///
    /// The directory is created lazily on first write, so constructing a
    /// store never fails.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    /// Returns the base directory this store writes under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl StorageBackend for FileStore {
    fn read_slot(&self, name: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.slot_path(name)) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write_slot(&mut self, name: &str, blob: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.slot_path(name), blob)?;
        Ok(())
    }

    fn remove_slot(&mut self, name: &str) -> Result<()> {
        match fs::remove_file(self.slot_path(name)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_absent_slot() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path());
        assert!(store.read_slot("missing").unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(tmp.path());
        store.write_slot("slot", "blob").unwrap();
        assert_eq!(store.read_slot("slot").unwrap(), Some("blob".to_string()));
    }

    #[test]
    fn test_write_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(tmp.path().join("nested/cache"));
        store.write_slot("slot", "blob").unwrap();
        assert_eq!(store.read_slot("slot").unwrap(), Some("blob".to_string()));
    }

    #[test]
    fn test_remove_slot() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(tmp.path());
        store.write_slot("slot", "blob").unwrap();
        store.remove_slot("slot").unwrap();
        assert!(store.read_slot("slot").unwrap().is_none());
    }

    #[test]
    fn test_remove_absent_slot_is_noop() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(tmp.path());
        store.remove_slot("missing").unwrap();
    }

    #[test]
    fn test_two_stores_same_directory_share_slots() {
        let tmp = tempfile::tempdir().unwrap();
        let mut writer = FileStore::new(tmp.path());
        let reader = FileStore::new(tmp.path());
        writer.write_slot("slot", "blob").unwrap();
        assert_eq!(reader.read_slot("slot").unwrap(), Some("blob".to_string()));
    }
}
