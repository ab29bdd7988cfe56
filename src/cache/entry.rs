//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use serde::{Deserialize, Serialize};

// == Cache Entry ==
/// Represents a single cache entry with value and expiry metadata.
///
/// The payload is opaque to the cache; anything serde can round-trip works.
/// Time never lives inside the entry - callers pass "now" in, so validity
/// checks stay deterministic under an injected clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// The stored value
    pub data: T,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: u64,
    /// Lifetime in milliseconds from `inserted_at`
    pub ttl_ms: u64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new cache entry inserted at `now_ms` with the given TTL.
    pub fn new(data: T, now_ms: u64, ttl_ms: u64) -> Self {
        Self {
            data,
            inserted_at: now_ms,
            ttl_ms,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired as of `now_ms`.
    ///
    /// An entry is valid while `now - inserted_at <= ttl`; it expires the
    /// instant its age strictly exceeds the TTL. A clock that appears to
    /// run backwards (now before `inserted_at`) counts as age zero.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.inserted_at) > self.ttl_ms
    }

    // == Is Valid ==
    /// Inverse of [`is_expired`](Self::is_expired).
    pub fn is_valid(&self, now_ms: u64) -> bool {
        !self.is_expired(now_ms)
    }

    // == Remaining TTL ==
    /// Returns remaining lifetime in milliseconds as of `now_ms`.
    ///
    /// Returns 0 once the entry has expired.
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        let deadline = self.inserted_at.saturating_add(self.ttl_ms);
        deadline.saturating_sub(now_ms)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("value", 1_000, 60_000);
        assert_eq!(entry.data, "value");
        assert_eq!(entry.inserted_at, 1_000);
        assert_eq!(entry.ttl_ms, 60_000);
    }

    #[test]
    fn test_entry_valid_within_ttl() {
        let entry = CacheEntry::new("value", 1_000, 500);
        assert!(entry.is_valid(1_000));
        assert!(entry.is_valid(1_400));
    }

    #[test]
    fn test_entry_valid_exactly_at_ttl_boundary() {
        // Age == ttl is still valid; only strictly greater expires
        let entry = CacheEntry::new("value", 1_000, 500);
        assert!(entry.is_valid(1_500));
        assert!(entry.is_expired(1_501));
    }

    #[test]
    fn test_entry_zero_ttl_expires_immediately_after_insertion() {
        let entry = CacheEntry::new("value", 1_000, 0);
        assert!(entry.is_valid(1_000));
        assert!(entry.is_expired(1_001));
    }

    #[test]
    fn test_entry_clock_before_insertion_counts_as_fresh() {
        let entry = CacheEntry::new("value", 1_000, 500);
        assert!(entry.is_valid(999));
    }

    #[test]
    fn test_remaining_ms() {
        let entry = CacheEntry::new("value", 1_000, 500);
        assert_eq!(entry.remaining_ms(1_000), 500);
        assert_eq!(entry.remaining_ms(1_200), 300);
        assert_eq!(entry.remaining_ms(1_500), 0);
        assert_eq!(entry.remaining_ms(2_000), 0);
    }

    #[test]
    fn test_entry_serde_round_trip() {
        let entry = CacheEntry::new(vec![1, 2, 3], 42, 1_000);
        let json = serde_json::to_string(&entry).unwrap();
        let back: CacheEntry<Vec<i32>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
