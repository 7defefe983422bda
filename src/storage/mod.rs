//! Key-value persistence for the journal blob.
//!
//! The journal only ever reads and writes whole values under one key, so
//! every backend is a plain string map.

mod file;
mod migrations;
mod sqlite;

use std::{collections::HashMap, sync::Mutex};

use anyhow::{anyhow, Result};

pub use file::JsonFileStore;
pub use sqlite::SqliteStore;

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Process-local store. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let guard = self
            .entries
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        guard.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("kidneyGardenData").unwrap(), None);

        store.set("kidneyGardenData", "{}").unwrap();
        assert_eq!(store.get("kidneyGardenData").unwrap().as_deref(), Some("{}"));

        store.set("kidneyGardenData", r#"{"drinks":1}"#).unwrap();
        assert_eq!(
            store.get("kidneyGardenData").unwrap().as_deref(),
            Some(r#"{"drinks":1}"#)
        );

        store.remove("kidneyGardenData").unwrap();
        assert_eq!(store.get("kidneyGardenData").unwrap(), None);
    }
}
