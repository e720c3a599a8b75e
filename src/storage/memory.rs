//! In-memory key-value store
//!
//! Backs the `memory` storage backend and doubles as the test fake: it
//! counts calls, can be pre-loaded with raw bytes, and can be told to reject
//! writes.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::{Error, Result};

use super::{validate_key, KeyValueStore};

/// Configuration for memory store behavior
#[derive(Debug, Clone, Default)]
pub struct MemoryConfig {
    /// Reject every `set` and `remove` with an IO error
    pub fail_writes: bool,
}

/// Process-lifetime key-value map
pub struct MemoryStore {
    config: MemoryConfig,
    entries: RwLock<HashMap<String, Vec<u8>>>,
    call_counts: RwLock<CallCounts>,
}

/// Track method call counts for verification
#[derive(Debug, Default)]
struct CallCounts {
    get: u32,
    set: u32,
    remove: u32,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_config(MemoryConfig::default())
    }

    /// Create an empty store with custom behavior
    pub fn with_config(config: MemoryConfig) -> Self {
        Self {
            config,
            entries: RwLock::new(HashMap::new()),
            call_counts: RwLock::new(CallCounts::default()),
        }
    }

    /// Pre-load a raw value, bypassing call counting
    pub fn with_entry(self, key: &str, value: impl Into<Vec<u8>>) -> Self {
        self.entries.write().insert(key.to_string(), value.into());
        self
    }

    /// Raw value under `key`, bypassing call counting
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.read().get(key).cloned()
    }

    /// Get the number of times a method was called
    pub fn call_count(&self, method: &str) -> u32 {
        let counts = self.call_counts.read();
        match method {
            "get" => counts.get,
            "set" => counts.set,
            "remove" => counts.remove,
            _ => 0,
        }
    }

    /// Reset all call counts
    pub fn reset_counts(&self) {
        *self.call_counts.write() = CallCounts::default();
    }

    fn check_writable(&self, key: &str) -> Result<()> {
        if self.config.fail_writes {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("memory store rejected write to '{}'", key),
            )));
        }
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.call_counts.write().get += 1;
        validate_key(key)?;
        Ok(self.entries.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.call_counts.write().set += 1;
        validate_key(key)?;
        self.check_writable(key)?;
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.call_counts.write().remove += 1;
        validate_key(key)?;
        self.check_writable(key)?;
        self.entries.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("plans", b"[]".to_vec()).await.unwrap();

        assert_eq!(store.get("plans").await.unwrap(), Some(b"[]".to_vec()));
        assert_eq!(store.get("members").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_absent_key() {
        let store = MemoryStore::new();
        store.remove("leads").await.unwrap();
        assert_eq!(store.call_count("remove"), 1);
    }

    #[tokio::test]
    async fn test_failed_write_keeps_previous_value() {
        let store = MemoryStore::with_config(MemoryConfig { fail_writes: true })
            .with_entry("members", "[1]");

        assert!(store.set("members", b"[2]".to_vec()).await.is_err());
        assert_eq!(store.raw("members"), Some(b"[1]".to_vec()));
    }

    #[tokio::test]
    async fn test_call_counting() {
        let store = MemoryStore::new();
        let _ = store.get("members").await;
        let _ = store.get("members").await;
        let _ = store.set("members", vec![]).await;

        assert_eq!(store.call_count("get"), 2);
        assert_eq!(store.call_count("set"), 1);

        store.reset_counts();
        assert_eq!(store.call_count("get"), 0);
    }

    #[tokio::test]
    async fn test_rejects_invalid_key() {
        let store = MemoryStore::new();
        assert!(store.set("Bad Key", vec![]).await.is_err());
    }
}
