//! Main menu and dashboard loops.

use super::{Cli, Console, handlers};
use crate::{
    account::adapters::memory::InMemoryAccountRepository,
    session::services::{SessionError, SessionService},
    task::domain::TaskSortKey,
};
use anyhow::Result;
use dialoguer::{Select, theme::ColorfulTheme};
use mockable::DefaultClock;
use std::io::{self, Stdout, Write};
use std::sync::Arc;

const MAIN_MENU: [&str; 3] = ["Register", "Login", "Exit"];
const DASHBOARD: [&str; 6] = [
    "Add Task",
    "View Tasks",
    "Update Task",
    "Delete Task",
    "Search Tasks",
    "Logout",
];

/// State shared by every menu action.
pub(crate) struct App<W> {
    pub(crate) session: SessionService<InMemoryAccountRepository, DefaultClock>,
    pub(crate) console: Console<W>,
    pub(crate) sort_by: TaskSortKey,
}

type Action<W> = fn(&mut App<W>) -> Result<()>;

/// Runs the interactive menu until the user exits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be read or written. Errors from
/// individual operations are reported and do not end the loop.
pub fn run(cli: &Cli) -> Result<()> {
    let mut app: App<Stdout> = App {
        session: SessionService::new(
            Arc::new(InMemoryAccountRepository::new()),
            Arc::new(DefaultClock),
        ),
        console: Console::new(io::stdout(), cli.output_format()),
        sort_by: cli.sort_by,
    };
    log::debug!("starting menu, listings sorted by {}", app.sort_by);
    main_menu(&mut app)
}

fn main_menu<W: Write>(app: &mut App<W>) -> Result<()> {
    loop {
        app.console.heading("TASK MANAGER")?;
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select an option")
            .items(&MAIN_MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => attempt(app, handlers::account::register)?,
            1 => {
                attempt(app, handlers::account::login)?;
                if app.session.state().is_logged_in() {
                    dashboard(app)?;
                }
            }
            _ => {
                app.console.info("Exiting...")?;
                return Ok(());
            }
        }
    }
}

fn dashboard<W: Write>(app: &mut App<W>) -> Result<()> {
    loop {
        app.console.heading("USER DASHBOARD")?;
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select an option")
            .items(&DASHBOARD)
            .default(0)
            .interact()?;

        let action: Action<W> = match choice {
            0 => handlers::tasks::add,
            1 => handlers::tasks::view,
            2 => handlers::tasks::update,
            3 => handlers::tasks::delete,
            4 => handlers::tasks::search,
            _ => {
                app.session.logout();
                app.console.info("Logging out...")?;
                return Ok(());
            }
        };
        attempt(app, action)?;
    }
}

/// Runs one action. Session errors are reported and swallowed; anything
/// else ends the loop.
fn attempt<W: Write>(app: &mut App<W>, action: Action<W>) -> Result<()> {
    let Err(err) = action(app) else {
        return Ok(());
    };
    match err.downcast_ref::<SessionError>() {
        Some(session_err) => {
            log::debug!("operation failed: {session_err}");
            app.console.failure(session_err)?;
            Ok(())
        }
        None => Err(err),
    }
}
