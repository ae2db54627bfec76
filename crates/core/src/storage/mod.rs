//! Snapshot storage
//!
//! Defines the named-slot interface the todo store persists through, with a
//! file-backed and an in-memory implementation.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::Result;

/// Key-value storage for serialized snapshots
pub trait SnapshotStorage {
    /// Read the contents of a slot, `None` if it was never written
    fn read(&self, slot: &str) -> Result<Option<String>>;

    /// Overwrite a slot with new contents
    fn write(&mut self, slot: &str, contents: &str) -> Result<()>;
}
