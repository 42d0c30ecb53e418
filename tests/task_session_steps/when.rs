//! When steps for task session BDD scenarios.

use super::world::{SessionWorld, task_request};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use tasktally::task::domain::{TaskSortKey, TaskStatus};

#[when(r#"the user adds a "{priority}" priority "{category}" task "{title}" due "{due}""#)]
fn user_adds_task(
    world: &mut SessionWorld,
    priority: String,
    category: String,
    title: String,
    due: String,
) {
    let result = world
        .session
        .add_task(task_request(&priority, &category, &title, &due));
    world.last_add_result = Some(result);
}

#[when(r#"the user deletes tasks titled "{title}""#)]
fn user_deletes_by_title(world: &mut SessionWorld, title: String) -> Result<(), eyre::Report> {
    let removed = world
        .session
        .delete_tasks_by_title(&title)
        .wrap_err("delete tasks by title")?;
    world.deleted = Some(removed);
    Ok(())
}

#[when(r#""{username}" registers again with password "{password}""#)]
fn registers_again(world: &mut SessionWorld, username: String, password: String) {
    let result = world.session.register(&username, &password);
    world.last_register_result = Some(result);
}

#[when(r#""{username}" logs in with password "{password}""#)]
fn attempts_login(world: &mut SessionWorld, username: String, password: String) {
    let result = world.session.login(&username, &password);
    world.login_results.push(result);
}

#[when(r#"the user sets the first task sorted by "{key}" to "{status}""#)]
fn sets_first_listed_task(
    world: &mut SessionWorld,
    key: String,
    status: String,
) -> Result<(), eyre::Report> {
    let sort_by = TaskSortKey::try_from(key.as_str())
        .map_err(|err| eyre::eyre!("invalid sort key in scenario: {err}"))?;
    let new_status = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;

    let listed = world
        .session
        .view_tasks(sort_by)
        .wrap_err("list tasks for selection")?;
    let first = listed
        .first()
        .ok_or_else(|| eyre::eyre!("no tasks listed"))?;
    world
        .session
        .update_task(first.id(), new_status)
        .wrap_err("update selected task")?;
    Ok(())
}
