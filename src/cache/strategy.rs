//! Cache Strategy Hints
//!
//! Named TTL policies for the three broad shapes of marketplace data. These
//! are plain numbers for callers layering their own freshness policy on top
//! of the cache: the manager itself never serves stale data and never
//! refreshes in the background. A caller implementing stale-while-revalidate
//! does so with `get`, its own staleness check, and its own refresh.

// == Cache Strategy ==
/// A TTL plus a stale-serving window, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStrategy {
    /// How long data is served as fresh
    pub ttl_ms: u64,
    /// Additional window in which a caller may serve stale data while it
    /// refreshes in the background
    pub stale_while_revalidate_ms: u64,
}

/// Fast-turnover listings (task feeds, search results).
pub const LIST: CacheStrategy = CacheStrategy {
    ttl_ms: 120_000,
    stale_while_revalidate_ms: 60_000,
};

/// Single-record detail views (one influencer, one company).
pub const DETAIL: CacheStrategy = CacheStrategy {
    ttl_ms: 300_000,
    stale_while_revalidate_ms: 120_000,
};

/// Rarely-changing reference data (categories).
pub const STATIC: CacheStrategy = CacheStrategy {
    ttl_ms: 600_000,
    stale_while_revalidate_ms: 300_000,
};
