//! Filter strategies applied to fetched tasks.
//!
//! Filters only ever narrow a sequence; relative order is preserved and
//! nothing is re-sorted.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::model::Task;

/// How a fetched task sequence is narrowed before rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskFilter {
    /// Identity. Also covers project-scoped listings, where the narrowing
    /// already happened at fetch time.
    All,
    /// Case-insensitive substring match on title, content, or any
    /// checklist-item title.
    Search { term: String },
    /// Keep tasks whose due date falls on the given calendar date.
    DueOn { date: NaiveDate },
}

impl TaskFilter {
    pub fn search(term: impl Into<String>) -> Self {
        TaskFilter::Search { term: term.into() }
    }

    /// Filter on the current UTC calendar date.
    pub fn due_today() -> Self {
        TaskFilter::DueOn {
            date: Utc::now().date_naive(),
        }
    }

    pub fn apply(&self, tasks: Vec<Task>) -> Vec<Task> {
        match self {
            TaskFilter::All => tasks,
            TaskFilter::Search { term } => {
                let needle = term.to_lowercase();
                tasks
                    .into_iter()
                    .filter(|task| matches_term(task, &needle))
                    .collect()
            }
            TaskFilter::DueOn { date } => tasks
                .into_iter()
                .filter(|task| due_date_of(task) == Some(*date))
                .collect(),
        }
    }
}

fn matches_term(task: &Task, needle: &str) -> bool {
    if task.title.to_lowercase().contains(needle) {
        return true;
    }
    if let Some(content) = &task.content
        && content.to_lowercase().contains(needle)
    {
        return true;
    }
    // First matching checklist item decides; `any` stops scanning there.
    task.items
        .iter()
        .any(|item| item.title.to_lowercase().contains(needle))
}

fn due_date_of(task: &Task) -> Option<NaiveDate> {
    task.due_date.as_deref().and_then(parse_due_date)
}

/// Parse a due-date timestamp to its calendar date.
///
/// The date component is taken in the timestamp's own offset, not shifted
/// to UTC. Accepts RFC 3339 (`Z` or `+00:00`), TickTick's compact `+0000`
/// offset, and a bare naive timestamp. Anything else is `None`: an
/// unparsable due date excludes the task rather than failing the query.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.date_naive());
    }
    if let Ok(parsed) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(parsed.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|parsed| parsed.date())
}
