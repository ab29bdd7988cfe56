//! Storage Backends
//!
//! Durable key/value slot stores the cache mirrors its snapshot into.
//!
//! A backend holds named slots, each containing one serialized blob. The
//! cache uses exactly one slot for its entire contents, so a reload of the
//! same process can rediscover its prior cache.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

// == Storage Backend Trait ==
/// Contract for a durable key/value byte-string store.
///
/// Failures are reported through `CacheError`; the cache swallows them and
/// keeps operating purely in-memory.
pub trait StorageBackend {
    /// Reads the blob stored under `name`, or `None` if the slot is absent.
    fn read_slot(&self, name: &str) -> Result<Option<String>>;

    /// Writes `blob` under `name`, replacing any previous contents.
    fn write_slot(&mut self, name: &str, blob: &str) -> Result<()>;

    /// Removes the slot entirely. Removing an absent slot is a no-op.
    fn remove_slot(&mut self, name: &str) -> Result<()>;
}
