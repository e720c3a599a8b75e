//! Collection names and the record trait

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::{Lead, Member, Plan, Trainer};

use super::seed;

/// Named collection, one storage key each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Members,
    Trainers,
    Plans,
    Leads,
}

impl Collection {
    /// Storage key
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Members => "members",
            Collection::Trainers => "trainers",
            Collection::Plans => "plans",
            Collection::Leads => "leads",
        }
    }

    pub fn all() -> &'static [Collection] {
        &[
            Collection::Members,
            Collection::Trainers,
            Collection::Plans,
            Collection::Leads,
        ]
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

/// Where `create` places a new record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Front,
    Back,
}

/// A record stored in one of the collections
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection this record type lives in
    const COLLECTION: Collection;

    fn id(&self) -> &str;

    /// Default records written on first read of an absent collection
    fn seed() -> Vec<Self>;
}

impl Record for Member {
    const COLLECTION: Collection = Collection::Members;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::members()
    }
}

impl Record for Trainer {
    const COLLECTION: Collection = Collection::Trainers;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::trainers()
    }
}

impl Record for Plan {
    const COLLECTION: Collection = Collection::Plans;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::plans()
    }
}

impl Record for Lead {
    const COLLECTION: Collection = Collection::Leads;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        Vec::new()
    }
}
