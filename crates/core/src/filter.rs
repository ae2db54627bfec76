//! Filter engine
//!
//! Computes the visible subset of a collection for a set of criteria, plus
//! counts that ignore the criteria entirely.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::task::{Task, TaskCategory, TaskPriority};
use crate::{Error, Result};

/// Completion-status criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(Error::InvalidInput(format!("unknown status: {other}"))),
        }
    }
}

/// Either every value, or exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl<T: FromStr<Err = Error>> FromStr for Choice<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(value) => value.fmt(f),
        }
    }
}

/// The four independent predicates a task must all pass to be visible
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub status: StatusFilter,
    pub priority: Choice<TaskPriority>,
    pub category: Choice<TaskCategory>,
    /// Case-insensitive substring of the title; empty matches everything
    pub search: String,
}

impl FilterCriteria {
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Choice::Only(priority);
        self
    }

    pub fn with_category(mut self, category: TaskCategory) -> Self {
        self.category = Choice::Only(category);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.status.matches(task)
            && self.priority.matches(&task.priority)
            && self.category.matches(&task.category)
            && (self.search.is_empty()
                || task
                    .title
                    .to_lowercase()
                    .contains(&self.search.to_lowercase()))
    }
}

/// Order-preserving subsequence of `tasks` that passes `criteria`
pub fn visible<'a>(tasks: &'a [Task], criteria: &FilterCriteria) -> Vec<&'a Task> {
    tasks.iter().filter(|task| criteria.matches(task)).collect()
}

/// Counts over the whole collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total,
            completed,
            active: total - completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::NewTask;

    fn task(title: &str, priority: TaskPriority, category: TaskCategory, completed: bool) -> Task {
        let mut task = Task::from_new(
            NewTask::new(title)
                .with_priority(priority)
                .with_category(category),
        );
        task.completed = completed;
        task
    }

    fn collection() -> Vec<Task> {
        vec![
            task("Buy milk", TaskPriority::Low, TaskCategory::Shopping, false),
            task("Gym session", TaskPriority::High, TaskCategory::Health, true),
            task("Ship release", TaskPriority::High, TaskCategory::Work, false),
            task("Call mom", TaskPriority::Medium, TaskCategory::Personal, true),
        ]
    }

    fn titles<'a>(tasks: &[&'a Task]) -> Vec<&'a str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_default_criteria_returns_everything_in_order() {
        let tasks = collection();
        let shown = visible(&tasks, &FilterCriteria::default());
        assert_eq!(
            titles(&shown),
            vec!["Buy milk", "Gym session", "Ship release", "Call mom"]
        );
    }

    #[test]
    fn test_status_active_is_incomplete_subsequence() {
        let tasks = collection();
        let criteria = FilterCriteria::default().with_status(StatusFilter::Active);
        let shown = visible(&tasks, &criteria);
        assert_eq!(titles(&shown), vec!["Buy milk", "Ship release"]);
        assert!(shown.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_status_completed() {
        let tasks = collection();
        let criteria = FilterCriteria::default().with_status(StatusFilter::Completed);
        assert_eq!(titles(&visible(&tasks, &criteria)), vec!["Gym session", "Call mom"]);
    }

    #[test]
    fn test_priority_and_category_exact_match() {
        let tasks = collection();
        let high = FilterCriteria::default().with_priority(TaskPriority::High);
        assert_eq!(titles(&visible(&tasks, &high)), vec!["Gym session", "Ship release"]);

        let high_work = high.with_category(TaskCategory::Work);
        assert_eq!(titles(&visible(&tasks, &high_work)), vec!["Ship release"]);
    }

    #[test]
    fn test_predicates_combine() {
        let tasks = collection();
        let criteria = FilterCriteria::default()
            .with_status(StatusFilter::Active)
            .with_priority(TaskPriority::High)
            .with_search("SHIP");
        assert_eq!(titles(&visible(&tasks, &criteria)), vec!["Ship release"]);

        let none = criteria.with_status(StatusFilter::Completed);
        assert!(visible(&tasks, &none).is_empty());
    }

    #[test]
    fn test_search_example() {
        let tasks = vec![task("Buy milk", TaskPriority::Low, TaskCategory::Shopping, false)];

        let milk = FilterCriteria::default().with_search("milk");
        assert_eq!(visible(&tasks, &milk).len(), 1);

        let bread = FilterCriteria::default().with_search("bread");
        assert!(visible(&tasks, &bread).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_on_title_only() {
        let mut tasks = collection();
        tasks[0].description = "from the corner shop".to_string();
        let criteria = FilterCriteria::default().with_search("MiLk");
        assert_eq!(titles(&visible(&tasks, &criteria)), vec!["Buy milk"]);

        let description_only = FilterCriteria::default().with_search("corner");
        assert!(visible(&tasks, &description_only).is_empty());
    }

    #[test]
    fn test_stats() {
        let tasks = collection();
        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.total, stats.active + stats.completed);

        assert_eq!(TaskStats::from_tasks(&[]), TaskStats::default());
    }

    #[test]
    fn test_parse_criteria() {
        assert_eq!("all".parse::<Choice<TaskPriority>>().unwrap(), Choice::All);
        assert_eq!(
            "Work".parse::<Choice<TaskCategory>>().unwrap(),
            Choice::Only(TaskCategory::Work)
        );
        assert_eq!("active".parse::<StatusFilter>().unwrap(), StatusFilter::Active);
        assert!("done".parse::<StatusFilter>().is_err());
        assert_eq!(Choice::Only(TaskPriority::High).to_string(), "high");
    }
}
