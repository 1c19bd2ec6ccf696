//! In-memory key/value store and the error type every store reports.
use crate::ResultStore;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Shared map standing in for browser storage in tests and tools.
///
/// Clones share the same map, so one clone can play the quiz page and
/// another the result page.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, e.g. one written by another producer.
    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl ResultStore for MemoryStore {
    type Error = StorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let store = MemoryStore::new();
        let reader = store.clone();
        assert!(reader.read("k").unwrap().is_none());
        store.write("k", "v").unwrap();
        assert_eq!(reader.read("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn with_entry_seeds_raw_values() {
        let store = MemoryStore::new().with_entry("k", "{not json");
        assert_eq!(store.read("k").unwrap().as_deref(), Some("{not json"));
    }
}
