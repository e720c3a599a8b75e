//! Storage module: the injected key-value medium
//!
//! The data-access layer only ever sees a [`SharedStore`]; which medium sits
//! behind it is chosen once per process from configuration.

mod file;
mod memory;
mod traits;

pub use file::FileStore;
pub use memory::{MemoryConfig, MemoryStore};
pub use traits::*;
