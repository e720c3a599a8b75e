//! Read-modify-write access to the collections

use std::time::Duration;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::storage::SharedStore;

use super::collection::{InsertPosition, Record};
use super::{Leads, Members, Plans, Trainers};

/// Simulated backend latency applied before each operation
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(400);

/// Data-access layer over a shared key-value store.
///
/// Holds no copy of any collection between calls. Cloning is cheap and
/// clones share the same storage.
#[derive(Clone)]
pub struct DataStore {
    storage: SharedStore,
    latency: Duration,
}

impl DataStore {
    /// Create a data store with the default simulated latency
    pub fn new(storage: SharedStore) -> Self {
        Self {
            storage,
            latency: DEFAULT_LATENCY,
        }
    }

    /// Override the simulated latency (zero disables it)
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Underlying storage handle
    pub fn storage(&self) -> &SharedStore {
        &self.storage
    }

    pub fn members(&self) -> Members<'_> {
        Members::new(self)
    }

    pub fn trainers(&self) -> Trainers<'_> {
        Trainers::new(self)
    }

    pub fn plans(&self) -> Plans<'_> {
        Plans::new(self)
    }

    pub fn leads(&self) -> Leads<'_> {
        Leads::new(self)
    }

    // ─────────────────────────────────────────────────────────────
    // Generic Operations
    // ─────────────────────────────────────────────────────────────

    /// Read a whole collection, seeding it if absent
    pub(crate) async fn get_all<R: Record>(&self) -> Result<Vec<R>> {
        self.pause().await;
        self.read().await
    }

    /// Add `record` at `position` and persist the collection
    pub(crate) async fn insert<R: Record>(&self, record: R, position: InsertPosition) -> Result<R> {
        self.pause().await;
        let mut records = self.read::<R>().await?;

        if records.iter().any(|r| r.id() == record.id()) {
            return Err(Error::Internal(format!(
                "duplicate id '{}' in {}",
                record.id(),
                R::COLLECTION
            )));
        }

        match position {
            InsertPosition::Front => records.insert(0, record.clone()),
            InsertPosition::Back => records.push(record.clone()),
        }
        self.write(&records).await?;

        info!(collection = %R::COLLECTION, id = record.id(), "Record created");
        Ok(record)
    }

    /// Apply `f` to the record with `id` and persist the collection
    pub(crate) async fn modify<R, F>(&self, id: &str, f: F) -> Result<R>
    where
        R: Record,
        F: FnOnce(&mut R),
    {
        self.pause().await;
        let mut records = self.read::<R>().await?;

        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| Error::not_found(R::COLLECTION.key(), id))?;
        f(record);
        let updated = record.clone();

        self.write(&records).await?;

        info!(collection = %R::COLLECTION, id, "Record updated");
        Ok(updated)
    }

    /// Remove the record with `id` and persist the collection
    pub(crate) async fn remove<R: Record>(&self, id: &str) -> Result<R> {
        self.pause().await;
        let mut records = self.read::<R>().await?;

        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Error::not_found(R::COLLECTION.key(), id))?;
        let removed = records.remove(index);

        self.write(&records).await?;

        info!(collection = %R::COLLECTION, id, "Record deleted");
        Ok(removed)
    }

    // ─────────────────────────────────────────────────────────────
    // Storage Access
    // ─────────────────────────────────────────────────────────────

    async fn pause(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    async fn read<R: Record>(&self) -> Result<Vec<R>> {
        let key = R::COLLECTION.key();

        match self.storage.get(key).await? {
            Some(bytes) => {
                let records: Vec<R> = serde_json::from_slice(&bytes).map_err(|e| {
                    Error::StorageCorrupt {
                        key: key.to_string(),
                        source: e,
                    }
                })?;
                debug!(collection = key, count = records.len(), "Collection loaded");
                Ok(records)
            }
            None => {
                let seed = R::seed();
                self.write(&seed).await?;
                info!(collection = key, count = seed.len(), "Collection seeded");
                Ok(seed)
            }
        }
    }

    async fn write<R: Record>(&self, records: &[R]) -> Result<()> {
        let key = R::COLLECTION.key();
        let bytes = serde_json::to_vec(records)?;
        self.storage.set(key, bytes).await?;
        debug!(collection = key, count = records.len(), "Collection written");
        Ok(())
    }
}
