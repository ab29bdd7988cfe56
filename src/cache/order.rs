//! Insertion Order Module
//!
//! Tracks the order entries were inserted, backing oldest-insertion eviction.
//!
//! Keys are stored in a VecDeque where:
//! - Front = Oldest insertion (next eviction victim)
//! - Back = Most recent insertion
//!
//! Re-inserting a key moves it to the back, since its insertion timestamp
//! resets on overwrite. Reads never reorder anything - eviction here is
//! strictly oldest-insertion-wins, not least-recently-used.

use std::collections::VecDeque;

// == Insertion Order ==
/// Tracks insertion order for eviction.
#[derive(Debug, Default)]
pub struct InsertionOrder {
    /// Keys ordered oldest-first by insertion
    order: VecDeque<String>,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Record ==
    /// Records an insertion (or overwrite) of `key`.
    ///
    /// An existing occurrence is removed first, so overwrites move the key
    /// to the back of the order.
    pub fn record(&mut self, key: &str) {
        self.remove(key);
        self.order.push_back(key.to_string());
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Pop Oldest ==
    /// Returns and removes the oldest-inserted key.
    ///
    /// Returns None if the tracker is empty.
    pub fn pop_oldest(&mut self) -> Option<String> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    /// Returns the oldest-inserted key without removing it.
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.front()
    }

    // == Iterate ==
    /// Iterates keys oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }

    // == Clear ==
    /// Drops all tracked keys.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
