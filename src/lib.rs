//! TikLive Cache - a client-side TTL cache
//!
//! Capacity- and time-bounded key/value caching for the marketplace
//! frontend's data layer, with optional snapshot persistence so a cache
//! survives a reload of the hosting process.

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod storage;

pub use cache::{
    resource_key, CacheEntry, CacheManager, CacheStats, CacheStrategy, PersistenceObserver,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use storage::{FileStore, MemoryStore, StorageBackend};
