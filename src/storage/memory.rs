//! In-Memory Storage Backend
//!
//! A cloneable shared slot map. Clones share the same underlying storage,
//! which lets tests hand the "same" backend to two cache instances and
//! exercise warm-starts without touching the filesystem.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::storage::StorageBackend;

// == Memory Store ==
/// Slot store backed by a shared in-process map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStore {
    fn read_slot(&self, name: &str) -> Result<Option<String>> {
        let slots = self.slots.lock().expect("slot map poisoned");
        Ok(slots.get(name).cloned())
    }

    fn write_slot(&mut self, name: &str, blob: &str) -> Result<()> {
        let mut slots = self.slots.lock().expect("slot map poisoned");
        slots.insert(name.to_string(), blob.to_string());
        Ok(())
    }

    fn remove_slot(&mut self, name: &str) -> Result<()> {
        let mut slots = self.slots.lock().expect("slot map poisoned");
        slots.remove(name);
        Ok(())
    }
}
