//! Error types for the cache
//!
//! Provides unified error handling using thiserror.
//!
//! None of these errors ever escape the public `CacheManager` API: every
//! persistence failure is caught, logged as a warning, and the cache keeps
//! operating purely in-memory. The variants exist so that storage backends
//! and the persistence observer have a concrete type to carry.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache persistence.
#[derive(Error, Debug)]
pub enum CacheError {
    /// A value or persisted snapshot could not be encoded/decoded
    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The durable backend rejected a read/write
    #[error("storage backend failure: {0}")]
    Storage(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for cache persistence paths.
pub type Result<T> = std::result::Result<T, CacheError>;
