//! Then steps for task session BDD scenarios.

use super::world::SessionWorld;
use eyre::WrapErr;
use rstest_bdd_macros::then;
use tasktally::{
    session::services::SessionError,
    task::domain::{TaskDomainError, TaskSortKey, TaskStatus},
};

#[then(r#"tasks sorted by "{key}" are due "{dates}""#)]
fn tasks_sorted_are_due(
    world: &SessionWorld,
    key: String,
    dates: String,
) -> Result<(), eyre::Report> {
    let tasks = world
        .session
        .view_tasks_sorted_by(&key)
        .wrap_err("view sorted tasks")?;
    let actual: Vec<String> = tasks
        .iter()
        .map(|task| task.due_date().to_string())
        .collect();
    let expected: Vec<&str> = dates.split(',').map(str::trim).collect();

    eyre::ensure!(
        actual == expected,
        "expected due dates {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"every task is titled "{title}""#)]
fn every_task_titled(world: &SessionWorld, title: String) -> Result<(), eyre::Report> {
    let tasks = world
        .session
        .view_tasks(TaskSortKey::DueDate)
        .wrap_err("view tasks")?;
    eyre::ensure!(!tasks.is_empty(), "expected at least one task");
    eyre::ensure!(
        tasks.iter().all(|task| task.title().as_str() == title),
        "expected every task to be titled {title:?}"
    );
    Ok(())
}

#[then("{count} tasks were deleted")]
fn tasks_were_deleted(world: &SessionWorld, count: usize) -> Result<(), eyre::Report> {
    let deleted = world
        .deleted
        .ok_or_else(|| eyre::eyre!("no delete was performed"))?;
    eyre::ensure!(deleted == count, "expected {count} deletions, found {deleted}");
    Ok(())
}

#[then("the user has {count} tasks")]
fn user_has_tasks(world: &SessionWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks = world
        .session
        .view_tasks(TaskSortKey::DueDate)
        .wrap_err("view tasks")?;
    eyre::ensure!(
        tasks.len() == count,
        "expected {count} tasks, found {}",
        tasks.len()
    );
    Ok(())
}

#[then("adding the task failed with an invalid due date error")]
fn add_failed_with_invalid_date(world: &SessionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_add_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing add result"))?;
    if !matches!(
        result,
        Err(SessionError::Task(TaskDomainError::InvalidDueDate(_)))
    ) {
        return Err(eyre::eyre!("expected InvalidDueDate error, got {result:?}"));
    }
    Ok(())
}

#[then("registration failed with a duplicate account error")]
fn registration_failed_as_duplicate(world: &SessionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_register_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result"))?;
    if !matches!(result, Err(SessionError::DuplicateAccount(_))) {
        return Err(eyre::eyre!("expected DuplicateAccount error, got {result:?}"));
    }
    Ok(())
}

#[then(r#""{username}" can still log in with password "{password}""#)]
fn can_still_log_in(
    world: &SessionWorld,
    username: String,
    password: String,
) -> Result<(), eyre::Report> {
    let mut session = world.fresh_session();
    session
        .login(&username, &password)
        .wrap_err("log in with the original password")?;
    Ok(())
}

#[then("every login attempt failed with the same authentication error")]
fn logins_failed_alike(world: &SessionWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.login_results.len() >= 2,
        "expected several login attempts, found {}",
        world.login_results.len()
    );
    let messages = world
        .login_results
        .iter()
        .map(|result| match result {
            Err(err @ SessionError::Authentication) => Ok(err.to_string()),
            other => Err(eyre::eyre!("expected Authentication error, got {other:?}")),
        })
        .collect::<Result<Vec<_>, _>>()?;
    eyre::ensure!(
        messages.windows(2).all(|pair| pair.first() == pair.last()),
        "login failures differ: {messages:?}"
    );
    eyre::ensure!(
        !world.session.state().is_logged_in(),
        "a failed login must not log anyone in"
    );
    Ok(())
}

#[then(r#"the task due "{due}" is "{status}""#)]
fn task_due_has_status(
    world: &SessionWorld,
    due: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let tasks = world
        .session
        .view_tasks(TaskSortKey::DueDate)
        .wrap_err("view tasks")?;
    let task = tasks
        .iter()
        .find(|task| task.due_date().to_string() == due)
        .ok_or_else(|| eyre::eyre!("no task due {due}"))?;
    eyre::ensure!(
        task.status() == expected,
        "expected {expected}, found {}",
        task.status()
    );
    Ok(())
}
