//! File-backed key-value store
//!
//! One file per key: `<root>/<key>.json`. Each write goes to its own
//! temporary sibling and is renamed into place. Overlapping writers to one
//! key never share a temp file, so the last rename wins with a whole value.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, trace, warn};
use uuid::Uuid;

use crate::error::{Error, Result};

use super::{validate_key, KeyValueStore};

const VALUE_EXT: &str = "json";
const TEMP_EXT: &str = "tmp";

/// Durable key-value store rooted at a directory
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`; the directory is created on first write
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.{}", key, VALUE_EXT))
    }

    /// Unique per write: `<key>.<uuid>.tmp`
    fn temp_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}.{}", key, Uuid::new_v4().simple(), TEMP_EXT))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        let path = self.value_path(key);

        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                trace!(key, bytes = bytes.len(), "Read value");
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::IoRead { path, source: e }),
        }
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        validate_key(key)?;

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| Error::IoWrite {
                path: self.root.clone(),
                source: e,
            })?;

        let temp = self.temp_path(key);
        let target = self.value_path(key);
        let len = value.len();

        if let Err(e) = tokio::fs::write(&temp, value).await {
            discard(&temp).await;
            return Err(Error::IoWrite {
                path: temp,
                source: e,
            });
        }
        if let Err(e) = tokio::fs::rename(&temp, &target).await {
            discard(&temp).await;
            return Err(Error::IoWrite {
                path: target,
                source: e,
            });
        }

        debug!(key, bytes = len, path = %target.display(), "Wrote value");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        let path = self.value_path(key);

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                debug!(key, "Removed value");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::IoWrite { path, source: e }),
        }
    }
}

/// Best-effort removal of a temp file left by a failed write
async fn discard(temp: &Path) {
    if let Err(e) = tokio::fs::remove_file(temp).await {
        if e.kind() != ErrorKind::NotFound {
            warn!(path = %temp.display(), error = %e, "Failed to remove temp file");
        }
    }
}
