//! In-memory snapshot storage, for tests and throwaway sessions

use std::collections::HashMap;

use super::SnapshotStorage;
use crate::Result;

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage with one slot already populated
    pub fn with_slot(slot: impl Into<String>, contents: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(slot.into(), contents.into());
        Self { slots }
    }

    pub fn get(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }
}

impl SnapshotStorage for MemoryStorage {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.slots.get(slot).cloned())
    }

    fn write(&mut self, slot: &str, contents: &str) -> Result<()> {
        self.slots.insert(slot.to_string(), contents.to_string());
        Ok(())
    }
}
