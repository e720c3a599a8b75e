//! Key-value storage trait definitions

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

use super::{FileStore, MemoryStore};

// ─────────────────────────────────────────────────────────────────
// KeyValueStore Trait
// ─────────────────────────────────────────────────────────────────

/// Whole-value key-value medium
///
/// Values are opaque bytes addressed by a string key. There is no sub-key
/// addressing: callers read and replace the entire value. A `set` must be
/// atomic per key, so a reader sees either the previous value or the new
/// one, never a mix.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Short backend name (e.g., "file", "memory")
    fn name(&self) -> &'static str;

    /// Read the value under `key`, `None` if the key was never written
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the value under `key`
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Delete `key`; deleting an absent key succeeds
    async fn remove(&self, key: &str) -> Result<()>;

    /// Check whether `key` currently holds a value
    async fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }
}

/// Type alias for a shared store reference
pub type SharedStore = Arc<dyn KeyValueStore>;

// ─────────────────────────────────────────────────────────────────
// Backend Selection
// ─────────────────────────────────────────────────────────────────

/// Available storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// One JSON file per key under the data directory
    File,
    /// Process-lifetime map, discarded on exit
    Memory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::File => "file",
            StorageBackend::Memory => "memory",
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "memory" | "mem" => Ok(StorageBackend::Memory),
            _ => Err(format!(
                "Unknown storage backend '{}'. Valid: file, memory",
                s
            )),
        }
    }
}

/// Build the process-wide store for the chosen backend
pub fn open_store(backend: StorageBackend, data_dir: &Path) -> SharedStore {
    match backend {
        StorageBackend::File => Arc::new(FileStore::new(data_dir)),
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
    }
}

/// Keys are plain names so they map safely onto file names
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(crate::error::Error::invalid_input(
            "key",
            format!("'{}' must match [a-z0-9_-]+", key),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_str() {
        assert_eq!("file".parse::<StorageBackend>(), Ok(StorageBackend::File));
        assert_eq!("MEMORY".parse::<StorageBackend>(), Ok(StorageBackend::Memory));
        assert!("sqlite".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn test_validate_key() {
        assert!(validate_key("members").is_ok());
        assert!(validate_key("auth_user").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("Members").is_err());
    }

    #[tokio::test]
    async fn test_open_memory_store() {
        let store = open_store(StorageBackend::Memory, Path::new("unused"));
        assert_eq!(store.name(), "memory");
        assert!(!store.contains("members").await.unwrap());
    }
}
