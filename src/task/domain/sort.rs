//! Sortable task attributes.

use super::{Task, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Task attribute used to order a task listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskSortKey {
    /// Byte-wise title order.
    Title,
    /// Byte-wise description order.
    Description,
    /// Chronological due date order.
    #[default]
    DueDate,
    /// Urgency order, `High` first.
    Priority,
    /// Byte-wise category order.
    Category,
    /// Lifecycle order, `Pending` first.
    Status,
}

impl TaskSortKey {
    /// All sort keys.
    pub const ALL: [Self; 6] = [
        Self::Title,
        Self::Description,
        Self::DueDate,
        Self::Priority,
        Self::Category,
        Self::Status,
    ];

    /// Returns the attribute name this key sorts by.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::DueDate => "due_date",
            Self::Priority => "priority",
            Self::Category => "category",
            Self::Status => "status",
        }
    }

    /// Compares two tasks by this key in ascending order.
    #[must_use]
    pub fn compare(self, left: &Task, right: &Task) -> Ordering {
        match self {
            Self::Title => left.title().cmp(right.title()),
            Self::Description => left.description().cmp(right.description()),
            Self::DueDate => left.due_date().cmp(&right.due_date()),
            Self::Priority => left.priority().cmp(&right.priority()),
            Self::Category => left.category().cmp(right.category()),
            Self::Status => left.status().cmp(&right.status()),
        }
    }
}

impl fmt::Display for TaskSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskSortKey {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| TaskDomainError::UnknownSortKey(value.to_owned()))
    }
}

impl FromStr for TaskSortKey {
    type Err = TaskDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}
