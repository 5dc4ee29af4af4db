//! Text rendering of tasks and projects for agent consumption.
//!
//! Pure functions: same record in, same string out. Dates are rendered
//! exactly as the API sent them (no timezone or locale conversion).
//! Absent optional fields are omitted rather than shown empty, and a
//! record missing its title or id renders a placeholder instead of
//! failing.

use super::model::{Project, Task};

/// Render a task as a block of `Key: value` lines.
pub fn format_task(task: &Task) -> String {
    let mut out = String::new();

    out.push_str(&format!("Title: {}\n", fallback(&task.title, "No title")));
    out.push_str(&format!("ID: {}\n", fallback(&task.id, "No ID")));
    out.push_str(&format!(
        "Project ID: {}\n",
        fallback(&task.project_id, "No project")
    ));

    let status = if task.is_completed() {
        "✓ Completed"
    } else {
        "□ Incomplete"
    };
    out.push_str(&format!("Status: {status}\n"));

    if task.priority > 0 {
        out.push_str(&format!("Priority: {}\n", priority_label(task.priority)));
    }

    if let Some(content) = &task.content
        && !content.is_empty()
    {
        out.push_str(&format!("Content: {content}\n"));
    }

    if let Some(due_date) = &task.due_date
        && !due_date.is_empty()
    {
        out.push_str(&format!("Due Date: {due_date}\n"));
    }

    if let Some(start_date) = &task.start_date
        && !start_date.is_empty()
    {
        out.push_str(&format!("Start Date: {start_date}\n"));
    }

    if !task.tags.is_empty() {
        out.push_str(&format!("Tags: {}\n", task.tags.join(", ")));
    }

    if !task.items.is_empty() {
        out.push_str(&format!("\nSubtasks ({}):\n", task.items.len()));
        for (i, item) in task.items.iter().enumerate() {
            let check = if item.is_completed() { "✓" } else { "□" };
            out.push_str(&format!(
                "{}. [{check}] {}\n",
                i + 1,
                fallback(&item.title, "No title")
            ));
        }
    }

    out
}

/// Render a project as a block of `Key: value` lines.
pub fn format_project(project: &Project) -> String {
    let mut out = String::new();

    out.push_str(&format!("Name: {}\n", fallback(&project.name, "No name")));
    out.push_str(&format!("ID: {}\n", fallback(&project.id, "No ID")));

    if let Some(color) = &project.color
        && !color.is_empty()
    {
        out.push_str(&format!("Color: {color}\n"));
    }

    if let Some(view_mode) = &project.view_mode
        && !view_mode.is_empty()
    {
        out.push_str(&format!("View Mode: {view_mode}\n"));
    }

    // "Closed" is worth showing either way, but only when the API
    // actually reported the field.
    if let Some(closed) = project.closed {
        out.push_str(&format!(
            "Closed: {}\n",
            if closed { "Yes" } else { "No" }
        ));
    }

    if let Some(kind) = &project.kind
        && !kind.is_empty()
    {
        out.push_str(&format!("Kind: {kind}\n"));
    }

    out
}

fn priority_label(priority: i64) -> String {
    match priority {
        1 => "Low".to_string(),
        3 => "Medium".to_string(),
        5 => "High".to_string(),
        other => format!("Priority {other}"),
    }
}

fn fallback<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}
