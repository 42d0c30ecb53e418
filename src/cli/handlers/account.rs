//! Register and login actions.

use super::{prompt_secret, prompt_text};
use crate::cli::menu::App;
use anyhow::Result;
use std::io::Write;

pub(crate) fn register<W: Write>(app: &mut App<W>) -> Result<()> {
    let username = prompt_text("Enter username")?;
    let password = prompt_secret("Enter password")?;
    let registered = app.session.register(&username, &password)?;
    app.console
        .success(&format!("User '{registered}' registered successfully!"))?;
    Ok(())
}

pub(crate) fn login<W: Write>(app: &mut App<W>) -> Result<()> {
    let username = prompt_text("Enter username")?;
    let password = prompt_secret("Enter password")?;
    let logged_in = app.session.login(&username, &password)?;
    app.console.success(&format!("Welcome, {logged_in}!"))?;
    Ok(())
}
