//! Snapshot codec
//!
//! A snapshot is the whole task collection as a JSON array, newest first.
//! Timestamps are RFC 3339 strings under `createdAt` and `dueDate`.

use crate::task::Task;
use crate::Result;

/// Serialize the full collection
pub fn encode(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tasks)?)
}

/// Parse a snapshot back into a collection, preserving order
pub fn decode(content: &str) -> Result<Vec<Task>> {
    Ok(serde_json::from_str(content)?)
}
