//! Command dispatch.

use anyhow::{Context, Result};
use todo_core::storage::SnapshotStorage;
use todo_core::{FileStorage, FilterCriteria, NewTask, TodoConfig, TodoStore};

use crate::cli::{Cli, Command};
use crate::output::Output;

/// Resolve the store location: environment first, then `--data-dir`
pub fn resolve_config(cli: &Cli) -> Result<TodoConfig> {
    let mut config = TodoConfig::from_env().context("invalid todo configuration")?;
    if let Some(dir) = &cli.data_dir {
        config = config.with_data_dir(dir);
    }
    Ok(config)
}

pub fn handle(cli: Cli, out: &Output) -> Result<()> {
    let config = resolve_config(&cli)?;
    tracing::debug!(data_dir = %config.data_dir.display(), slot = %config.slot, "opening store");

    let mut store: TodoStore<FileStorage> = TodoStore::from_config(&config);
    run(&mut store, cli.command, out)
}

/// Apply one command to an open store
pub fn run<S: SnapshotStorage>(
    store: &mut TodoStore<S>,
    command: Command,
    out: &Output,
) -> Result<()> {
    match command {
        Command::Add {
            title,
            description,
            priority,
            category,
            due,
        } => {
            let mut new = NewTask::new(title)
                .with_description(description)
                .with_priority(priority)
                .with_category(category);
            new.due_date = due;

            match store.add(new) {
                Some(task) => {
                    let data = serde_json::to_value(task)?;
                    out.success(&format!("Added {}", task.id), Some(&data));
                }
                None => out.notice("Title cannot be empty, nothing added"),
            }
        }
        Command::Toggle { id: needle } => {
            let toggled = store.find_id(&needle).filter(|id| store.toggle(*id));
            match toggled.and_then(|id| store.get(id)) {
                Some(task) => {
                    let state = if task.completed { "completed" } else { "active" };
                    out.success(&format!("Marked {} {state}", task.id), None);
                }
                None => out.notice(&format!("No task matches {needle}")),
            }
        }
        Command::Delete { id: needle } => match store.find_id(&needle) {
            Some(id) if store.delete(id) => out.success(&format!("Deleted {id}"), None),
            _ => out.notice(&format!("No task matches {needle}")),
        },
        Command::List {
            status,
            priority,
            category,
            search,
        } => {
            let criteria = FilterCriteria {
                status,
                priority,
                category,
                search,
            };
            out.task_list(&store.stats(), &store.visible(&criteria));
        }
        Command::Stats => out.stats(&store.stats()),
    }
    Ok(())
}
