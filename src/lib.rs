//! IronCore Admin - gym administration core
//!
//! Members, leads, trainers and subscription plans kept as whole JSON
//! collections in a pluggable key-value store, plus a placeholder login and
//! a static role → area visibility table.

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod session;
pub mod storage;
pub mod store;
pub mod types;
pub mod version;

pub use error::{Error, Result};
