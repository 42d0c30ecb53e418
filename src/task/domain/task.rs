//! Task record and creation parameters.

use super::{DueDate, TaskCategory, TaskId, TaskPriority, TaskStatus, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated fields for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Task title.
    pub title: TaskTitle,
    /// Free-form description, possibly empty.
    pub description: String,
    /// Due date.
    pub due_date: DueDate,
    /// Priority.
    pub priority: TaskPriority,
    /// Category.
    pub category: TaskCategory,
}

impl NewTask {
    /// Creates task fields with an empty description and default priority and
    /// category.
    #[must_use]
    pub fn new(title: TaskTitle, due_date: DueDate) -> Self {
        Self {
            title,
            description: String::new(),
            due_date,
            priority: TaskPriority::default(),
            category: TaskCategory::default(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: TaskCategory) -> Self {
        self.category = category;
        self
    }
}

/// A single unit of work owned by an account.
///
/// Every field except the status is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    due_date: DueDate,
    priority: TaskPriority,
    category: TaskCategory,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new pending task.
    #[must_use]
    pub fn new(fields: NewTask, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let NewTask {
            title,
            description,
            due_date,
            priority,
            category,
        } = fields;

        Self {
            id: TaskId::new(),
            title,
            description,
            due_date,
            priority,
            category,
            status: TaskStatus::Pending,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DueDate {
        self.due_date
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> &TaskCategory {
        &self.category
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest status-change timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Overwrites the status. Any status may follow any other.
    pub fn update_status(&mut self, new_status: TaskStatus, clock: &impl Clock) {
        self.status = new_status;
        self.updated_at = clock.utc();
    }
}
