//! Records as returned by the TickTick open API.
//!
//! All fields are optional on the wire; struct-level `#[serde(default)]`
//! maps absent keys to empty strings, empty collections, or `None` so a
//! sparse payload never fails to decode. Unknown keys are ignored.

use serde::{Deserialize, Serialize};

/// Status code TickTick uses for a completed task.
pub const TASK_COMPLETED: i64 = 2;

/// Status code TickTick uses for a completed checklist item.
///
/// Checklist items report completion as 1 while their parent task uses 2;
/// the two scales are part of the upstream contract.
pub const ITEM_COMPLETED: i64 = 1;

/// A task within a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub content: Option<String>,
    /// 0 = incomplete, 2 = completed; any other code reads as incomplete.
    pub status: i64,
    /// 0 = none, 1 = low, 3 = medium, 5 = high; other values pass through.
    pub priority: i64,
    /// ISO-8601 timestamp text, rendered verbatim.
    pub due_date: Option<String>,
    pub start_date: Option<String>,
    pub tags: Vec<String>,
    /// Checklist items, in upstream order.
    pub items: Vec<ChecklistItem>,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == TASK_COMPLETED
    }
}

/// A checklist item (subtask) belonging to a task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChecklistItem {
    pub title: String,
    pub status: i64,
}

impl ChecklistItem {
    pub fn is_completed(&self) -> bool {
        self.status == ITEM_COMPLETED
    }
}

/// A project (task list) in the user's account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub view_mode: Option<String>,
    /// Present only when the API reports it; `None` means unknown.
    pub closed: Option<bool>,
    pub kind: Option<String>,
}

impl Project {
    pub fn is_closed(&self) -> bool {
        self.closed.unwrap_or(false)
    }
}
