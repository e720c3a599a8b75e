//! Persisted collection store
//!
//! Four named collections (members, trainers, plans, leads) live as whole
//! JSON arrays in a [`KeyValueStore`](crate::storage::KeyValueStore). Every
//! operation re-reads the collection, mutates it, and writes it back in full.
//! A collection that has never been written is seeded on first read.

mod collection;
mod data_store;
mod leads;
mod members;
mod plans;
mod seed;
mod trainers;

pub use collection::{Collection, InsertPosition, Record};
pub use data_store::{DataStore, DEFAULT_LATENCY};
pub use leads::{LeadBoard, Leads};
pub use members::Members;
pub use plans::Plans;
pub use trainers::{avatar_url, Trainers};
