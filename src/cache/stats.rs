//! Cache Statistics Module
//!
//! Tracks cache performance counters and builds diagnostic snapshots.

use serde::Serialize;

// == Stat Counters ==
/// Lifetime counters maintained by the cache as it operates.
#[derive(Debug, Clone, Default)]
pub struct StatCounters {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not found or expired)
    pub misses: u64,
    /// Number of entries evicted by the capacity bound
    pub evictions: u64,
}

impl StatCounters {
    /// Creates counters with everything at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }
}

// == Cache Stats ==
/// Point-in-time diagnostic snapshot of the cache.
///
/// `total_items` counts every physically present entry, valid or expired;
/// `valid_items`/`expired_items` partition that count by the TTL rule at
/// snapshot time. `memory_usage_bytes` is a best-effort serialized-size
/// estimate and may legitimately be 0 if serialization fails.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Raw entry count (valid + expired)
    pub total_items: usize,
    /// Entries still within their TTL
    pub valid_items: usize,
    /// Entries past their TTL but not yet purged
    pub expired_items: usize,
    /// Approximate serialized size of the full store in bytes
    pub memory_usage_bytes: u64,
    /// Lifetime hit count
    pub hits: u64,
    /// Lifetime miss count
    pub misses: u64,
    /// Lifetime eviction count
    pub evictions: u64,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
