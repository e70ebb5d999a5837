//! Persistence module for state serialization
//!
//! Provides snapshot export/import and the key-value store the snapshot
//! is written to.

mod snapshot;
mod store;

pub use snapshot::{Snapshot, SNAPSHOT_KEY};
pub use store::{KeyValueStore, MemoryStore};
