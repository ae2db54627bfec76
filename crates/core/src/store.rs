//! Todo store
//!
//! Owns the task collection and writes a full snapshot after every change.
//! The collection is read from storage exactly once, when the store opens.

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::config::TodoConfig;
use crate::filter::{self, FilterCriteria, TaskStats};
use crate::snapshot;
use crate::storage::{FileStorage, SnapshotStorage};
use crate::task::{NewTask, Task};
use crate::Result;

/// The task collection plus the slot it persists to
#[derive(Debug)]
pub struct TodoStore<S> {
    /// Newest first
    tasks: Vec<Task>,
    storage: S,
    slot: String,
}

impl TodoStore<FileStorage> {
    /// Open the file-backed store described by `config`
    pub fn from_config(config: &TodoConfig) -> Self {
        Self::open(FileStorage::new(&config.data_dir), config.slot.clone())
    }
}

impl<S: SnapshotStorage> TodoStore<S> {
    /// Open a store, loading whatever the slot currently holds
    pub fn open(storage: S, slot: impl Into<String>) -> Self {
        let slot = slot.into();
        let tasks = Self::load(&storage, &slot);
        Self {
            tasks,
            storage,
            slot,
        }
    }

    /// Read the collection from a slot.
    ///
    /// A missing, unreadable or corrupt snapshot yields an empty collection.
    pub fn load(storage: &S, slot: &str) -> Vec<Task> {
        let content = match storage.read(slot) {
            Ok(Some(content)) => content,
            Ok(None) => {
                debug!(slot, "no snapshot yet, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(slot, error = %e, "failed to read snapshot, starting empty");
                return Vec::new();
            }
        };

        match snapshot::decode(&content) {
            Ok(tasks) => {
                info!(slot, count = tasks.len(), "loaded tasks");
                tasks
            }
            Err(e) => {
                warn!(slot, error = %e, "corrupt snapshot, starting empty");
                Vec::new()
            }
        }
    }

    /// Create a task at the front of the collection.
    ///
    /// Returns `None` without touching anything if the title is blank.
    pub fn add(&mut self, new: NewTask) -> Option<&Task> {
        if new.is_blank() {
            debug!("ignoring task with blank title");
            return None;
        }

        let task = Task::from_new(new);
        debug!(id = %task.id, title = %task.title, "adding task");
        self.tasks.insert(0, task);
        self.persist();
        self.tasks.first()
    }

    /// Flip `completed` on a task. Returns false if no task has that id.
    pub fn toggle(&mut self, id: Uuid) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(%id, "toggle: no such task");
            return false;
        };

        task.completed = !task.completed;
        debug!(%id, completed = task.completed, "toggled task");
        self.persist();
        true
    }

    /// Remove a task. Returns false if no task has that id.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            debug!(%id, "delete: no such task");
            return false;
        }

        debug!(%id, "deleted task");
        self.persist();
        true
    }

    /// Write the full collection to the slot, overwriting the previous snapshot
    pub fn flush(&mut self) -> Result<()> {
        let content = snapshot::encode(&self.tasks)?;
        self.storage.write(&self.slot, &content)
    }

    /// Mutations never fail; a failed write is logged and the in-memory
    /// state stays authoritative until the next successful write.
    fn persist(&mut self) {
        if let Err(e) = self.flush() {
            error!(slot = %self.slot, error = %e, "failed to persist tasks");
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Resolve a full id or an unambiguous id prefix
    pub fn find_id(&self, needle: &str) -> Option<Uuid> {
        let needle = needle.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return None;
        }
        if let Ok(id) = Uuid::parse_str(&needle) {
            return self.get(id).map(|t| t.id);
        }

        let mut matches = self
            .tasks
            .iter()
            .filter(|t| t.id.to_string().starts_with(&needle));
        match (matches.next(), matches.next()) {
            (Some(task), None) => Some(task.id),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks passing `criteria`, in collection order
    pub fn visible(&self, criteria: &FilterCriteria) -> Vec<&Task> {
        filter::visible(&self.tasks, criteria)
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
