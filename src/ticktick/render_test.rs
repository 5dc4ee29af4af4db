//! Tests for text rendering

use crate::ticktick::model::{ChecklistItem, Project, Task};
use crate::ticktick::render::{format_project, format_task};

fn item(title: &str, status: i64) -> ChecklistItem {
    ChecklistItem {
        title: title.to_string(),
        status,
    }
}

#[test]
fn test_task_title_and_id_rendered_verbatim() {
    let task = Task {
        id: "task-123".to_string(),
        project_id: "proj-9".to_string(),
        title: "Buy milk".to_string(),
        ..Task::default()
    };

    let text = format_task(&task);

    assert!(text.contains("Title: Buy milk\n"));
    assert!(text.contains("ID: task-123\n"));
    assert!(text.contains("Project ID: proj-9\n"));
}

#[test]
fn test_missing_required_fields_render_placeholders() {
    let text = format_task(&Task::default());

    assert!(text.contains("Title: No title\n"));
    assert!(text.contains("ID: No ID\n"));
    assert!(text.contains("Project ID: No project\n"));
}

#[test]
fn test_absent_optionals_are_omitted() {
    let text = format_task(&Task::default());

    assert!(!text.contains("Priority:"));
    assert!(!text.contains("Content:"));
    assert!(!text.contains("Due Date:"));
    assert!(!text.contains("Start Date:"));
    assert!(!text.contains("Tags:"));
    assert!(!text.contains("Subtasks"));
}

#[test]
fn test_empty_content_is_omitted() {
    let task = Task {
        content: Some(String::new()),
        ..Task::default()
    };

    assert!(!format_task(&task).contains("Content:"));
}

#[test]
fn test_status_glyphs() {
    let completed = Task {
        status: 2,
        ..Task::default()
    };
    let unrecognized = Task {
        status: 7,
        ..Task::default()
    };

    assert!(format_task(&completed).contains("Status: ✓ Completed\n"));
    assert!(format_task(&Task::default()).contains("Status: □ Incomplete\n"));
    assert!(
        format_task(&unrecognized).contains("Status: □ Incomplete\n"),
        "unrecognized codes read as incomplete"
    );
}

#[test]
fn test_priority_labels() {
    let with_priority = |priority| Task {
        priority,
        ..Task::default()
    };

    assert!(format_task(&with_priority(1)).contains("Priority: Low\n"));
    assert!(format_task(&with_priority(3)).contains("Priority: Medium\n"));
    assert!(format_task(&with_priority(5)).contains("Priority: High\n"));
    assert!(format_task(&with_priority(2)).contains("Priority: Priority 2\n"));
    assert!(!format_task(&with_priority(0)).contains("Priority:"));
}

#[test]
fn test_dates_rendered_as_received() {
    let task = Task {
        due_date: Some("2025-03-04T09:00:00.000+0000".to_string()),
        start_date: Some("2025-03-01T09:00:00.000+0000".to_string()),
        ..Task::default()
    };

    let text = format_task(&task);

    assert!(text.contains("Due Date: 2025-03-04T09:00:00.000+0000\n"));
    assert!(text.contains("Start Date: 2025-03-01T09:00:00.000+0000\n"));
}

#[test]
fn test_tags_joined_in_order() {
    let task = Task {
        tags: vec!["home".to_string(), "errands".to_string()],
        ..Task::default()
    };

    assert!(format_task(&task).contains("Tags: home, errands\n"));
}

#[test]
fn test_subtasks_numbered_with_own_glyphs() {
    let task = Task {
        items: vec![item("Check fridge", 1), item("Go shopping", 0)],
        ..Task::default()
    };

    let text = format_task(&task);

    assert!(text.contains("\nSubtasks (2):\n"));
    assert!(text.contains("1. [✓] Check fridge\n"));
    assert!(text.contains("2. [□] Go shopping\n"));
}

#[test]
fn test_subtask_glyph_ignores_parent_completion_code() {
    // 2 completes a task but not a checklist item.
    let task = Task {
        items: vec![item("Half done", 2)],
        ..Task::default()
    };

    assert!(format_task(&task).contains("1. [□] Half done\n"));
}

#[test]
fn test_rendering_is_deterministic() {
    let task = Task {
        id: "t1".to_string(),
        title: "Stable".to_string(),
        tags: vec!["a".to_string(), "b".to_string()],
        items: vec![item("one", 0)],
        ..Task::default()
    };

    assert_eq!(format_task(&task), format_task(&task));
}

#[test]
fn test_project_fields_and_placeholders() {
    let project = Project {
        id: "p1".to_string(),
        name: "Work".to_string(),
        color: Some("#F18181".to_string()),
        view_mode: Some("kanban".to_string()),
        closed: Some(false),
        kind: Some("TASK".to_string()),
    };

    let text = format_project(&project);

    assert!(text.contains("Name: Work\n"));
    assert!(text.contains("ID: p1\n"));
    assert!(text.contains("Color: #F18181\n"));
    assert!(text.contains("View Mode: kanban\n"));
    assert!(text.contains("Closed: No\n"));
    assert!(text.contains("Kind: TASK\n"));

    let bare = format_project(&Project::default());
    assert!(bare.contains("Name: No name\n"));
    assert!(bare.contains("ID: No ID\n"));
    assert!(!bare.contains("Color:"));
    assert!(!bare.contains("View Mode:"));
    assert!(!bare.contains("Closed:"));
    assert!(!bare.contains("Kind:"));
}

#[test]
fn test_project_closed_yes() {
    let project = Project {
        closed: Some(true),
        ..Project::default()
    };

    assert!(format_project(&project).contains("Closed: Yes\n"));
}
