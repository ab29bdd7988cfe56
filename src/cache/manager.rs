//! Cache Manager Module
//!
//! Main cache engine combining HashMap storage with insertion-order eviction,
//! TTL expiration, and snapshot persistence to a durable slot store.
//!
//! The manager never fails out of its public API: any persistence problem is
//! swallowed, logged as a warning, and reported to the optional observer,
//! after which the cache keeps working purely in-memory.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::{CacheEntry, CacheStats, InsertionOrder, StatCounters};
use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::CacheError;
use crate::storage::{FileStore, MemoryStore, StorageBackend};

// == Persistence Observer ==
/// Hook for callers that want to notice degraded durability.
///
/// The cache never raises; when a snapshot save or load fails it logs a
/// warning and, if an observer is installed, reports the error here. Both
/// methods default to no-ops.
pub trait PersistenceObserver {
    /// Called when the persisted snapshot cannot be read or decoded at
    /// construction time.
    fn on_load_error(&self, _err: &CacheError) {}

    /// Called when writing the snapshot after a mutation fails.
    fn on_save_error(&self, _err: &CacheError) {}
}

// == Cache Manager ==
/// Capacity- and time-bounded cache of arbitrary serializable values.
///
/// # Type Parameters
/// - `T`: Cached value type (opaque; must round-trip through serde)
/// - `C`: Clock supplying "now" (defaults to [`SystemClock`])
///
/// Single-threaded by design: every method runs to completion synchronously
/// and takes `&mut self` where it mutates. Two instances sharing one backend
/// slot are last-writer-wins with no coordination.
pub struct CacheManager<T, C = SystemClock> {
    /// Key-value storage (valid and not-yet-purged expired entries)
    entries: HashMap<String, CacheEntry<T>>,
    /// Insertion-order tracker backing eviction
    order: InsertionOrder,
    /// Lifetime hit/miss/eviction counters
    counters: StatCounters,
    /// TTL, capacity, and persistence settings
    config: CacheConfig,
    /// Durable slot store for the snapshot
    backend: Box<dyn StorageBackend>,
    /// Optional durability-failure hook
    observer: Option<Box<dyn PersistenceObserver>>,
    /// Time source
    clock: C,
}

impl<T> CacheManager<T, SystemClock>
where
    T: Clone + Serialize + DeserializeOwned,
{
    // == Constructors ==
    /// Creates a manager on the wall clock, persisting to a [`FileStore`]
    /// rooted at `config.storage_dir`.
    ///
    /// If persistence is enabled, any still-valid entries from a previous
    /// snapshot are loaded before this returns.
    pub fn new(config: CacheConfig) -> Self {
        let backend = Box::new(FileStore::new(config.storage_dir.clone()));
        Self::with_backend(config, backend)
    }

    /// Creates a manager on the wall clock against an explicit backend.
    pub fn with_backend(config: CacheConfig, backend: Box<dyn StorageBackend>) -> Self {
        Self::with_clock(config, backend, SystemClock)
    }

    /// Creates a purely in-memory manager with persistence switched off.
    pub fn ephemeral(mut config: CacheConfig) -> Self {
        config.persistent = false;
        Self::with_backend(config, Box::new(MemoryStore::new()))
    }
}

impl<T, C> CacheManager<T, C>
where
    T: Clone + Serialize + DeserializeOwned,
    C: Clock,
{
    /// Creates a manager with an explicit backend and clock.
    pub fn with_clock(config: CacheConfig, backend: Box<dyn StorageBackend>, clock: C) -> Self {
        Self::assemble(config, backend, clock, None)
    }

    /// Creates a fully wired manager, including the persistence observer.
    ///
    /// The observer is installed before the snapshot load runs, so it also
    /// sees construction-time failures.
    pub fn with_observer(
        config: CacheConfig,
        backend: Box<dyn StorageBackend>,
        clock: C,
        observer: Box<dyn PersistenceObserver>,
    ) -> Self {
        Self::assemble(config, backend, clock, Some(observer))
    }

    fn assemble(
        config: CacheConfig,
        backend: Box<dyn StorageBackend>,
        clock: C,
        observer: Option<Box<dyn PersistenceObserver>>,
    ) -> Self {
        let mut manager = Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            counters: StatCounters::new(),
            config,
            backend,
            observer,
            clock,
        };
        if manager.config.persistent {
            manager.load_snapshot();
        }
        manager
    }

    // == Set ==
    /// Stores a key-value pair with optional TTL override in milliseconds.
    ///
    /// If the key already exists, the value is overwritten and its insertion
    /// timestamp resets. Every write first purges all expired entries, then
    /// evicts at most one oldest-inserted entry if the store is still at
    /// capacity. Callers relying on strict capacity enforcement should note
    /// that eviction is "one oldest entry per write", never more.
    ///
    /// # Arguments
    /// * `key` - The key to store under
    /// * `value` - The value to store
    /// * `ttl_ms` - Optional TTL in milliseconds (uses default_ttl_ms if None)
    pub fn set(&mut self, key: impl Into<String>, value: T, ttl_ms: Option<u64>) {
        let key = key.into();
        let now = self.clock.now_ms();

        let purged = self.cleanup_expired(now);
        if purged > 0 {
            debug!(purged, "purged expired entries on write");
        }

        // No overwrite special-case: a set on an existing key while at
        // capacity still evicts the oldest entry first.
        if self.entries.len() >= self.config.max_size {
            if let Some(victim) = self.order.pop_oldest() {
                self.entries.remove(&victim);
                self.counters.record_eviction();
                debug!(key = %victim, "evicted oldest entry at capacity");
            }
        }

        let ttl_ms = ttl_ms.unwrap_or(self.config.default_ttl_ms);
        self.entries.insert(key.clone(), CacheEntry::new(value, now, ttl_ms));
        self.order.record(&key);

        self.save_snapshot(now);
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` for absent keys and for expired entries. An expired
    /// entry is pruned from the in-memory store on access; the persisted
    /// snapshot is not resynced for that (pruning is incidental, and the
    /// next write rewrites the snapshot anyway).
    pub fn get(&mut self, key: &str) -> Option<T> {
        let now = self.clock.now_ms();
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired(now) {
                self.entries.remove(key);
                self.order.remove(key);
                self.counters.record_miss();
                return None;
            }

            let value = entry.data.clone();
            self.counters.record_hit();
            Some(value)
        } else {
            self.counters.record_miss();
            None
        }
    }

    // == Has ==
    /// Checks whether a key is present and unexpired.
    ///
    /// Shares `get`'s expiry-check-and-prune semantics but returns only
    /// existence. Probes do not move the hit/miss counters.
    pub fn has(&mut self, key: &str) -> bool {
        let now = self.clock.now_ms();
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired(now) {
                self.entries.remove(key);
                self.order.remove(key);
                return false;
            }
            true
        } else {
            false
        }
    }

    // == Delete ==
    /// Removes an entry by key; returns whether something was removed.
    ///
    /// The snapshot is resynced only when a removal actually occurred.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.order.remove(key);
            let now = self.clock.now_ms();
            self.save_snapshot(now);
        }
        removed
    }

    // == Clear ==
    /// Empties the entire store.
    ///
    /// With persistence enabled this writes an empty snapshot, so a reload
    /// does not resurrect cleared entries. Clearing an empty store is a
    /// no-op apart from that rewrite.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        let now = self.clock.now_ms();
        self.save_snapshot(now);
    }

    // == Stats ==
    /// Returns a non-mutating diagnostic snapshot.
    ///
    /// Unlike `set`, this performs no pruning: `total_items` counts expired
    /// entries that are still physically present, partitioned into
    /// `valid_items`/`expired_items` by the TTL rule at call time.
    pub fn stats(&self) -> CacheStats {
        let now = self.clock.now_ms();
        let total_items = self.entries.len();
        let valid_items = self
            .entries
            .values()
            .filter(|entry| entry.is_valid(now))
            .count();

        CacheStats {
            total_items,
            valid_items,
            expired_items: total_items - valid_items,
            memory_usage_bytes: self.estimate_bytes(),
            hits: self.counters.hits,
            misses: self.counters.misses,
            evictions: self.counters.evictions,
        }
    }

    // == Length ==
    /// Returns the raw entry count (valid + not-yet-purged expired).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if no entries are physically present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Cleanup Expired ==
    /// Removes every expired entry. Runs at the start of each `set`; there
    /// is no timer-driven background sweep.
    fn cleanup_expired(&mut self, now_ms: u64) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now_ms))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.order.remove(&key);
        }

        count
    }

    // == Snapshot Save ==
    /// Serializes the currently valid subset, oldest-insertion first, and
    /// writes it to the backend slot. Failures are swallowed.
    fn save_snapshot(&mut self, now_ms: u64) {
        if !self.config.persistent {
            return;
        }

        let pairs: Vec<(&String, &CacheEntry<T>)> = self
            .order
            .iter()
            .filter_map(|key| self.entries.get(key).map(|entry| (key, entry)))
            .filter(|(_, entry)| entry.is_valid(now_ms))
            .collect();

        let blob = match serde_json::to_string(&pairs) {
            Ok(blob) => blob,
            Err(err) => {
                warn!(error = %err, "snapshot serialization failed, skipping persistence for this write");
                self.notify_save_error(&CacheError::Serialization(err));
                return;
            }
        };

        if let Err(err) = self.backend.write_slot(&self.config.slot_name, &blob) {
            warn!(slot = %self.config.slot_name, error = %err, "snapshot write failed, continuing in-memory");
            self.notify_save_error(&err);
        }
    }

    // == Snapshot Load ==
    /// Repopulates still-valid entries from the persisted snapshot.
    ///
    /// Runs once, at construction. A blob that cannot be read or decoded is
    /// discarded wholesale and the cache starts empty; there is no partial
    /// recovery. Entries that expired while persisted are skipped and not
    /// re-saved.
    fn load_snapshot(&mut self) {
        let blob = match self.backend.read_slot(&self.config.slot_name) {
            Ok(Some(blob)) => blob,
            Ok(None) => return,
            Err(err) => {
                warn!(slot = %self.config.slot_name, error = %err, "snapshot read failed, starting empty");
                self.notify_load_error(&err);
                return;
            }
        };

        let pairs: Vec<(String, CacheEntry<T>)> = match serde_json::from_str(&blob) {
            Ok(pairs) => pairs,
            Err(err) => {
                warn!(slot = %self.config.slot_name, error = %err, "snapshot corrupt, discarding and starting empty");
                self.notify_load_error(&CacheError::Serialization(err));
                return;
            }
        };

        let now = self.clock.now_ms();
        let mut restored = 0usize;
        for (key, entry) in pairs {
            if entry.is_valid(now) {
                self.order.record(&key);
                self.entries.insert(key, entry);
                restored += 1;
            }
        }

        if restored > 0 {
            debug!(restored, slot = %self.config.slot_name, "warm-started from persisted snapshot");
        }
    }

    // == Size Estimate ==
    /// Best-effort serialized size of the full store, 0 if serialization
    /// fails.
    fn estimate_bytes(&self) -> u64 {
        let pairs: Vec<(&String, &CacheEntry<T>)> = self
            .order
            .iter()
            .filter_map(|key| self.entries.get(key).map(|entry| (key, entry)))
            .collect();

        match serde_json::to_string(&pairs) {
            Ok(blob) => blob.len() as u64,
            Err(err) => {
                warn!(error = %err, "size estimate serialization failed");
                0
            }
        }
    }

    fn notify_load_error(&self, err: &CacheError) {
        if let Some(observer) = &self.observer {
            observer.on_load_error(err);
        }
    }

    fn notify_save_error(&self, err: &CacheError) {
        if let Some(observer) = &self.observer {
            observer.on_save_error(err);
        }
    }
}
