//! In-memory counter store.

use std::sync::Mutex;

use crate::store::{CounterStore, StoreError};

/// Counter store holding the count in process memory.
///
/// Counts do not survive a restart; suitable for tests and ephemeral
/// deployments.
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    count: Mutex<u64>,
}

impl MemoryCounterStore {
    /// Create an empty store starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an existing count.
    pub fn with_count(count: u64) -> Self {
        Self { count: Mutex::new(count) }
    }
}

impl CounterStore for MemoryCounterStore {
    fn read(&self) -> Result<u64, StoreError> {
        Ok(*self.count.lock().unwrap())
    }

    fn increment_and_get(&self) -> Result<u64, StoreError> {
        let mut count = self.count.lock().unwrap();
        *count += 1;
        Ok(*count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test increments are sequential and reads do not mutate.
    #[test]
    fn test_increment_and_read() {
        let store = MemoryCounterStore::with_count(5);
        assert_eq!(store.read().expect("read"), 5);
        assert_eq!(store.increment_and_get().expect("increment"), 6);
        assert_eq!(store.increment_and_get().expect("increment"), 7);
        assert_eq!(store.read().expect("read"), 7);
    }
}
