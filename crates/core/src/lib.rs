//! Core library for the todo tracker
//!
//! This crate contains the task model and everything that operates on it:
//! - Todo store (add, toggle, delete, persisted after every change)
//! - Filter engine and derived statistics
//! - Snapshot codec and storage slots

pub mod config;
pub mod error;
pub mod filter;
pub mod snapshot;
pub mod storage;
pub mod store;
pub mod task;

pub use config::TodoConfig;
pub use error::Error;
pub use filter::{visible, Choice, FilterCriteria, StatusFilter, TaskStats};
pub use storage::{FileStorage, MemoryStorage, SnapshotStorage};
pub use store::TodoStore;
pub use task::{NewTask, Task, TaskCategory, TaskPriority};

pub type Result<T> = std::result::Result<T, Error>;
