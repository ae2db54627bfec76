//! Store configuration

use std::env::VarError;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::{Error, Result};

pub const DEFAULT_DATA_DIR: &str = ".todo-data";
pub const DEFAULT_SLOT: &str = "todos";

/// Where the todo store keeps its snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// Directory for file-backed slots
    pub data_dir: PathBuf,
    /// Name of the slot holding the collection
    pub slot: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            slot: DEFAULT_SLOT.to_string(),
        }
    }
}

impl TodoConfig {
    /// Read `TODO_DATA_DIR` and `TODO_SLOT`, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::var_os("TODO_DATA_DIR"), std::env::var_os("TODO_SLOT"))
    }

    /// Build from raw variable values. The data dir is taken as-is, so
    /// non-UTF-8 paths work; a slot name must be valid UTF-8.
    pub fn from_vars(data_dir: Option<OsString>, slot: Option<OsString>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(data_dir) = data_dir {
            config = config.with_data_dir(data_dir);
        }
        if let Some(slot) = slot {
            let slot = slot
                .into_string()
                .map_err(VarError::NotUnicode)
                .map_err(|e| Error::Config(format!("TODO_SLOT: {e}")))?;
            config = config.with_slot(slot);
        }
        config.validated()
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = slot.into();
        self
    }

    /// Slot names become file names, so they must be plain
    pub fn validated(self) -> Result<Self> {
        let slot = self.slot.trim();
        if slot.is_empty() {
            return Err(Error::Config("slot name cannot be empty".to_string()));
        }
        if slot.contains(['/', '\\']) || slot == "." || slot == ".." {
            return Err(Error::Config(format!("invalid slot name: {slot}")));
        }
        let slot = slot.to_string();
        Ok(Self { slot, ..self })
    }
}
