//! Given steps for task session BDD scenarios.

use super::world::{SessionWorld, task_request};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a registered user "{username}" with password "{password}""#)]
fn registered_user(
    world: &mut SessionWorld,
    username: String,
    password: String,
) -> Result<(), eyre::Report> {
    world
        .session
        .register(&username, &password)
        .wrap_err("register scenario user")?;
    Ok(())
}

#[given(r#""{username}" is logged in with password "{password}""#)]
fn logged_in(
    world: &mut SessionWorld,
    username: String,
    password: String,
) -> Result<(), eyre::Report> {
    world
        .session
        .login(&username, &password)
        .wrap_err("log in scenario user")?;
    Ok(())
}

#[given(r#"the user has a "{priority}" priority "{category}" task "{title}" due "{due}""#)]
fn user_has_task(
    world: &mut SessionWorld,
    priority: String,
    category: String,
    title: String,
    due: String,
) -> Result<(), eyre::Report> {
    world
        .session
        .add_task(task_request(&priority, &category, &title, &due))
        .wrap_err("add scenario task")?;
    Ok(())
}
