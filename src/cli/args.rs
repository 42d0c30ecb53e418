//! Command-line flags.

use super::OutputFormat;
use crate::task::domain::TaskSortKey;
use clap::Parser;

/// Interactive multi-account task tracker. All data lives in memory and is
/// discarded on exit.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tasktally", version, about)]
pub struct Cli {
    /// Task attribute used to order listings: title, description, due_date,
    /// priority, category or status.
    #[arg(long, env = "TASKTALLY_SORT_BY", default_value_t = TaskSortKey::DueDate)]
    pub sort_by: TaskSortKey,

    /// Render task listings as JSON instead of text.
    #[arg(long, env = "TASKTALLY_JSON")]
    pub json: bool,

    /// Disable coloured output.
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Returns the listing format selected by the flags.
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}
