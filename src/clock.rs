//! Clock Abstraction
//!
//! All entry timestamps flow through an injectable clock so tests can
//! simulate the passage of time deterministically instead of sleeping.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// == Clock Trait ==
/// Source of "now" as Unix epoch milliseconds.
pub trait Clock {
    /// Returns the current time in Unix epoch milliseconds.
    fn now_ms(&self) -> u64;
}

// == System Clock ==
/// Wall-clock implementation used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        chrono::Utc::now().timestamp_millis() as u64
    }
}

// == Manual Clock ==
/// A clock that only moves when told to.
///
/// Cloning shares the underlying instant, so a test can hold one handle,
/// hand a clone to the cache, and advance both at once.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a manual clock starting at the given epoch-millisecond instant.
    pub fn at(start_ms: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start_ms)),
        }
    }

    /// Advances the clock by `delta_ms` milliseconds.
    pub fn advance_ms(&self, delta_ms: u64) {
        self.now.fetch_add(delta_ms, Ordering::SeqCst);
    }

    /// Jumps the clock to an absolute epoch-millisecond instant.
    pub fn set_ms(&self, instant_ms: u64) {
        self.now.store(instant_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_nonzero() {
        let clock = SystemClock;
        assert!(clock.now_ms() > 0);
    }

    #[test]
    fn test_manual_clock_starts_where_told() {
        let clock = ManualClock::at(1_000);
        assert_eq!(clock.now_ms(), 1_000);
    }

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::at(0);
        clock.advance_ms(250);
        clock.advance_ms(250);
        assert_eq!(clock.now_ms(), 500);
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::at(0);
        let handle = clock.clone();
        handle.advance_ms(42);
        assert_eq!(clock.now_ms(), 42);
    }

    #[test]
    fn test_manual_clock_set_absolute() {
        let clock = ManualClock::at(10);
        clock.set_ms(5);
        assert_eq!(clock.now_ms(), 5);
    }
}
