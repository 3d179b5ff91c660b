//! File-backed counter store.
//!
//! The count lives as a single JSON record in one file. Every
//! read-modify-write cycle runs under one in-process mutex, so
//! concurrent increments are serialized and none are lost.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use time::OffsetDateTime;

use crate::store::{CounterStore, StoreError, VisitorCount};

/// Counter store persisting [`VisitorCount`] as the entire content of a
/// JSON file.
pub struct FileCounterStore {
    path: PathBuf,
    /// Guards the whole read-modify-write cycle on the backing file.
    lock: Mutex<()>,
}

impl FileCounterStore {
    /// Open the store at `path`, creating the file with a zero record if
    /// it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the initial record cannot be written.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            persist(&path, &VisitorCount::zero())?;
        }
        Ok(Self { path, lock: Mutex::new(()) })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn load(path: &Path) -> Result<VisitorCount, StoreError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn persist(path: &Path, record: &VisitorCount) -> Result<(), StoreError> {
    fs::write(path, serde_json::to_string_pretty(record)?)?;
    Ok(())
}

impl CounterStore for FileCounterStore {
    fn read(&self) -> Result<u64, StoreError> {
        let _guard = self.lock.lock().unwrap();
        load(&self.path).map(|record| record.count)
    }

    fn increment_and_get(&self) -> Result<u64, StoreError> {
        let _guard = self.lock.lock().unwrap();
        let mut record = load(&self.path)?;
        record.count += 1;
        record.last_updated = OffsetDateTime::now_utc();
        persist(&self.path, &record)?;
        Ok(record.count)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use tempfile::tempdir;

    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileCounterStore {
        FileCounterStore::open(dir.path().join("visitor-count.json")).expect("open store")
    }

    /// Test opening a fresh store initializes the file with count zero.
    #[test]
    fn test_open_initializes_file() {
        let dir = tempdir().expect("create temp dir");
        let store = store_in(&dir);

        assert!(store.path().exists());
        assert_eq!(store.read().expect("read"), 0);

        let raw = fs::read_to_string(store.path()).expect("read file");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("valid JSON");
        assert_eq!(value["count"], 0);
        assert!(value["lastUpdated"].is_string());
    }

    /// Test opening over an existing file keeps its count.
    #[test]
    fn test_open_preserves_existing_state() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("visitor-count.json");
        fs::write(&path, r#"{"count": 7, "lastUpdated": "2025-08-03T00:00:00Z"}"#)
            .expect("seed file");

        let store = FileCounterStore::open(&path).expect("open store");
        assert_eq!(store.read().expect("read"), 7);
    }

    /// Test sequential increments return N+1 then N+2.
    #[test]
    fn test_sequential_increments() {
        let dir = tempdir().expect("create temp dir");
        let store = store_in(&dir);

        assert_eq!(store.increment_and_get().expect("increment"), 1);
        assert_eq!(store.increment_and_get().expect("increment"), 2);
        assert_eq!(store.read().expect("read"), 2);
    }

    /// Test reads never change the count.
    #[test]
    fn test_read_is_idempotent() {
        let dir = tempdir().expect("create temp dir");
        let store = store_in(&dir);
        store.increment_and_get().expect("increment");

        assert_eq!(store.read().expect("read"), 1);
        assert_eq!(store.read().expect("read"), 1);
    }

    /// Test an increment refreshes the lastUpdated timestamp.
    #[test]
    fn test_increment_updates_timestamp() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("visitor-count.json");
        fs::write(&path, r#"{"count": 0, "lastUpdated": "2020-01-01T00:00:00Z"}"#)
            .expect("seed file");

        let store = FileCounterStore::open(&path).expect("open store");
        store.increment_and_get().expect("increment");

        let record = load(store.path()).expect("load record");
        assert!(record.last_updated.year() > 2020);
    }

    /// Test a corrupt file surfaces errors on both read and increment.
    #[test]
    fn test_corrupt_file_errors() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("visitor-count.json");
        fs::write(&path, "not json").expect("seed file");

        let store = FileCounterStore::open(&path).expect("open store");
        assert!(matches!(store.read(), Err(StoreError::Record(_))));
        assert!(matches!(store.increment_and_get(), Err(StoreError::Record(_))));
    }

    /// Test K concurrent increments from zero land at exactly K.
    #[test]
    fn test_concurrent_increments_lose_nothing() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 25;

        let dir = tempdir().expect("create temp dir");
        let store = Arc::new(store_in(&dir));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..PER_THREAD {
                        store.increment_and_get().expect("increment");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread");
        }

        assert_eq!(store.read().expect("read"), (THREADS * PER_THREAD) as u64);
    }
}
