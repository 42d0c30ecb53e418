//! Task actions for the logged-in account.

use super::{choose, prompt_text, prompt_text_or};
use crate::{
    cli::{SelectionDetail, menu::App, selection_label},
    session::services::AddTaskRequest,
    task::domain::{Task, TaskCategory, TaskPriority, TaskStatus},
};
use anyhow::Result;
use std::io::Write;

pub(crate) fn add<W: Write>(app: &mut App<W>) -> Result<()> {
    let title = prompt_text("Task title")?;
    let description = prompt_text("Description")?;
    let due_date = prompt_text("Due date (YYYY-MM-DD)")?;
    let priority = prompt_text_or(
        "Priority (High/Medium/Low)",
        TaskPriority::default().as_str(),
    )?;
    let category = prompt_text_or("Category", TaskCategory::DEFAULT)?;

    let request = AddTaskRequest::new(title, due_date)
        .with_description(description)
        .with_priority(priority)
        .with_category(category);
    let task = app.session.add_task(request)?;
    app.console
        .success(&format!("Task '{}' added successfully!", task.title()))?;
    Ok(())
}

pub(crate) fn view<W: Write>(app: &mut App<W>) -> Result<()> {
    let tasks = app.session.view_tasks(app.sort_by)?;
    app.console.tasks(&tasks, "No tasks available.")
}

pub(crate) fn update<W: Write>(app: &mut App<W>) -> Result<()> {
    let tasks = app.session.view_tasks(app.sort_by)?;
    let Some(task) = pick_task(app, &tasks, "Select a task to update", SelectionDetail::Status)?
    else {
        return Ok(());
    };

    let labels: Vec<String> = TaskStatus::ALL
        .iter()
        .map(|status| status.label().to_owned())
        .collect();
    let Some(&status) = TaskStatus::ALL.get(choose("Select new status", &labels)?) else {
        app.console.failure(&"Invalid status selection!")?;
        return Ok(());
    };

    let updated = app.session.update_task(task.id(), status)?;
    app.console.success(&format!(
        "Task '{}' updated to '{}' successfully!",
        updated.title(),
        status.label()
    ))?;
    Ok(())
}

pub(crate) fn delete<W: Write>(app: &mut App<W>) -> Result<()> {
    let tasks = app.session.view_tasks(app.sort_by)?;
    let Some(task) = pick_task(app, &tasks, "Select a task to delete", SelectionDetail::DueDate)?
    else {
        return Ok(());
    };

    let removed = app.session.delete_task(task.id())?;
    app.console
        .success(&format!("Task '{}' deleted successfully!", removed.title()))?;
    Ok(())
}

pub(crate) fn search<W: Write>(app: &mut App<W>) -> Result<()> {
    let input = prompt_text("Search keyword")?;
    let keyword = input.trim();
    if keyword.is_empty() {
        app.console.failure(&"Search keyword cannot be empty!")?;
        return Ok(());
    }

    let results = app.session.search_tasks(keyword)?;
    app.console.tasks(&results, "No matching tasks found.")
}

/// Shows a numbered task list with a trailing cancel entry. Returns `None`
/// when there is nothing to pick or the user cancels.
fn pick_task<'a, W: Write>(
    app: &mut App<W>,
    tasks: &'a [Task],
    prompt: &str,
    detail: SelectionDetail,
) -> Result<Option<&'a Task>> {
    if tasks.is_empty() {
        app.console.info("No tasks available.")?;
        return Ok(None);
    }

    let mut items: Vec<String> = tasks
        .iter()
        .enumerate()
        .map(|(index, task)| selection_label(index + 1, task, detail))
        .collect();
    items.push("Cancel".to_owned());

    Ok(tasks.get(choose(prompt, &items)?))
}
