//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use todo_core::task::parse_due_date;
use todo_core::{Choice, StatusFilter, TaskCategory, TaskPriority};

/// Track todos from the terminal
#[derive(Debug, Parser)]
#[command(name = "todo", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Data directory (overrides TODO_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a task to the top of the list
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// low, medium or high
        #[arg(short, long, default_value = "medium")]
        priority: TaskPriority,
        /// personal, work, shopping or health
        #[arg(short, long, default_value = "personal")]
        category: TaskCategory,
        /// YYYY-MM-DD or an RFC 3339 timestamp
        #[arg(long, value_parser = parse_due_date)]
        due: Option<DateTime<Utc>>,
    },
    /// Mark a task done, or not done again
    Toggle {
        /// Task id or an unambiguous prefix of it
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task id or an unambiguous prefix of it
        id: String,
    },
    /// Show tasks matching the given filters
    List {
        /// all, active or completed
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        #[arg(long, default_value = "all")]
        priority: Choice<TaskPriority>,
        #[arg(long, default_value = "all")]
        category: Choice<TaskCategory>,
        /// Case-insensitive title substring
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show total, completed and active counts
    Stats,
}
