//! Menu actions and the prompts they share.

pub(crate) mod account;
pub(crate) mod tasks;

use anyhow::Result;
use dialoguer::{Input, Password, Select, theme::ColorfulTheme};

/// Reads a line of text. Empty input is accepted; the core validates it.
pub(crate) fn prompt_text(prompt: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

/// Reads a line of text, offering `default` when the user just hits enter.
pub(crate) fn prompt_text_or(prompt: &str, default: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default.to_owned())
        .interact_text()?)
}

/// Reads a password without echoing it.
pub(crate) fn prompt_secret(prompt: &str) -> Result<String> {
    Ok(Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?)
}

/// Lets the user pick one of `items`, returning its index.
pub(crate) fn choose(prompt: &str, items: &[String]) -> Result<usize> {
    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?)
}
