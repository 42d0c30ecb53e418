//! Styled output sink for the menu.

use super::render::{task_summary, tasks_json};
use crate::task::domain::Task;
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};

/// How task listings are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human-readable block per task.
    #[default]
    Text,
    /// A single JSON array.
    Json,
}

/// Writes menu output to any [`Write`] sink.
#[derive(Debug)]
pub struct Console<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Console<W> {
    /// Creates a console over `out`.
    #[must_use]
    pub const fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Writes a menu heading.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn heading(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "\n{}", text.bold().yellow())
    }

    /// Writes an unstyled line.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn info(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Writes a success message.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn success(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text.green())
    }

    /// Writes a failure message.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn failure(&mut self, message: &impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", message.to_string().red())
    }

    /// Writes a task listing, or `empty_message` when there are no tasks.
    ///
    /// In JSON mode an empty listing is written as `[]`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or JSON serialization fails.
    pub fn tasks(&mut self, tasks: &[Task], empty_message: &str) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => writeln!(self.out, "{}", tasks_json(tasks)?)?,
            OutputFormat::Text if tasks.is_empty() => self.info(empty_message)?,
            OutputFormat::Text => {
                for task in tasks {
                    writeln!(self.out, "{}", task_summary(task))?;
                }
            }
        }
        Ok(())
    }

    /// Consumes the console and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}
