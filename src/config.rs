//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Default TTL in milliseconds for entries without explicit TTL
    pub default_ttl_ms: u64,
    /// Maximum number of entries (valid + expired) before eviction triggers
    pub max_size: usize,
    /// Whether the cache mirrors itself to a durable backend
    pub persistent: bool,
    /// Name of the backend slot holding the full-cache snapshot
    pub slot_name: String,
    /// Directory used by the file-backed storage backend
    pub storage_dir: PathBuf,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL_MS` - Default TTL in milliseconds (default: 300000)
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 100)
    /// - `PERSISTENCE_ENABLED` - Mirror to durable storage (default: true)
    /// - `CACHE_SLOT` - Snapshot slot name (default: "tiklive_cache")
    /// - `STORAGE_DIR` - Directory for the file backend (default: temp dir)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_ttl_ms: env::var("DEFAULT_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_ttl_ms),
            max_size: env::var("MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_size),
            persistent: env::var("PERSISTENCE_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.persistent),
            slot_name: env::var("CACHE_SLOT").unwrap_or(defaults.slot_name),
            storage_dir: env::var("STORAGE_DIR")
                .ok()
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_ms: crate::cache::DEFAULT_TTL_MS,
            max_size: crate::cache::DEFAULT_MAX_SIZE,
            persistent: true,
            slot_name: crate::cache::DEFAULT_SLOT_NAME.to_string(),
            storage_dir: env::temp_dir().join("tiklive-cache"),
        }
    }
}
