//! Plain-text and JSON renderings of tasks.

use crate::task::domain::Task;

/// Extra detail shown next to a task title in a selection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDetail {
    /// Show the due date.
    DueDate,
    /// Show the status label.
    Status,
}

/// Renders the full listing entry for a task.
#[must_use]
pub fn task_summary(task: &Task) -> String {
    format!(
        "[ {} ] {} | Due: {} | Priority: {} | Category: {}\nDescription: {}\n",
        task.status().label(),
        task.title(),
        task.due_date(),
        task.priority(),
        task.category(),
        task.description(),
    )
}

/// Renders a numbered selection entry. `position` is one-based.
#[must_use]
pub fn selection_label(position: usize, task: &Task, detail: SelectionDetail) -> String {
    match detail {
        SelectionDetail::DueDate => {
            format!("{position}. {} (Due: {})", task.title(), task.due_date())
        }
        SelectionDetail::Status => {
            format!("{position}. {} (Status: {})", task.title(), task.status().label())
        }
    }
}

/// Renders tasks as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if serialization fails.
pub fn tasks_json(tasks: &[Task]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tasks)
}
