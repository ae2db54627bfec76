//! Terminal output helpers: styled text for humans, JSON for machines.
//!
//! `console` handles colors (respects NO_COLOR, auto-disables when piped).

use console::style;
use serde::Serialize;
use serde_json::Value as JsonValue;
use todo_core::{Task, TaskStats};

use crate::cli::OutputFormat;

pub const EMPTY_LIST: &str = "No todos found. Add some tasks to get started!";

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn render_json(level: &str, message: &str, data: Option<&JsonValue>) -> String {
    let msg = Msg {
        level,
        message,
        data,
    };
    serde_json::to_string(&msg).unwrap_or_else(|_| {
        format!("{{\"level\":\"{level}\",\"message\":\"{message}\"}}")
    })
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn success(&self, text: &str, data: Option<&JsonValue>) {
        if self.is_json() {
            println!("{}", render_json("success", text, data));
        } else {
            println!("{} {}", style("✓").green(), text);
        }
    }

    pub fn notice(&self, text: &str) {
        if self.is_json() {
            println!("{}", render_json("notice", text, None));
        } else {
            println!("{} {}", style("!").yellow(), text);
        }
    }

    pub fn error(&self, text: &str) {
        if self.is_json() {
            eprintln!("{}", render_json("error", text, None));
        } else {
            eprintln!("{} {}", style("✗").red(), text);
        }
    }

    pub fn stats(&self, stats: &TaskStats) {
        if self.is_json() {
            let data = serde_json::to_value(stats).unwrap_or(JsonValue::Null);
            println!("{}", render_json("data", "stats", Some(&data)));
        } else {
            println!("{}", stats_line(stats));
        }
    }

    pub fn task_list(&self, stats: &TaskStats, tasks: &[&Task]) {
        if self.is_json() {
            let data = serde_json::json!({ "stats": stats, "tasks": tasks });
            println!("{}", render_json("data", "tasks", Some(&data)));
            return;
        }

        println!("{}", stats_line(stats));
        println!();
        if tasks.is_empty() {
            println!("{}", style(EMPTY_LIST).dim());
            return;
        }
        for task in tasks {
            println!("{}", task_line(task));
            if !task.description.is_empty() {
                println!("           {}", style(&task.description).dim());
            }
        }
    }
}

pub fn stats_line(stats: &TaskStats) -> String {
    format!(
        "Total: {}  Completed: {}  Active: {}",
        stats.total, stats.completed, stats.active
    )
}

/// One line per task: checkbox, short id, title, then tags
pub fn task_line(task: &Task) -> String {
    let check = if task.completed { "[x]" } else { "[ ]" };
    let short_id: String = task.id.to_string().chars().take(8).collect();
    let title = if task.completed {
        style(task.title.as_str()).dim().strikethrough()
    } else {
        style(task.title.as_str()).bold()
    };

    let mut tags = vec![task.priority.label().to_string(), task.category.label().to_string()];
    if let Some(due) = task.due_date {
        tags.push(format!("due {}", due.format("%Y-%m-%d")));
    }

    format!("{check} {short_id}  {title}  ({})", tags.join(" · "))
}
