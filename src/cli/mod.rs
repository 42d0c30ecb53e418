//! Interactive menu front end for the task tracker.
//!
//! This layer owns every prompt and every line of output. It collects raw
//! input, hands it to [`crate::session::services::SessionService`] untouched,
//! and reports core errors without ending the session: a failed operation
//! returns to the menu it was started from.

mod args;
mod console;
mod handlers;
mod menu;
mod render;

pub use args::Cli;
pub use console::{Console, OutputFormat};
pub use menu::run;
pub use render::{SelectionDetail, selection_label, task_summary, tasks_json};

#[cfg(test)]
mod tests;
