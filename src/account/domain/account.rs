//! Account aggregate root.

use super::{Password, Username};
use crate::task::domain::{Task, TaskId, TaskList, TaskSortKey, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// A registered user and the tasks it exclusively owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    username: Username,
    password: Password,
    tasks: TaskList,
    created_at: DateTime<Utc>,
}

impl Account {
    /// Creates an account with no tasks.
    #[must_use]
    pub fn new(username: Username, password: Password, clock: &impl Clock) -> Self {
        Self {
            username,
            password,
            tasks: TaskList::new(),
            created_at: clock.utc(),
        }
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the owned tasks in insertion order.
    #[must_use]
    pub const fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Checks a login attempt against the stored password.
    #[must_use]
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password.matches(candidate)
    }

    /// Appends a task to the end of the collection.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.add(task);
    }

    /// Removes every task titled exactly `title`, returning how many went.
    pub fn delete_task(&mut self, title: &str) -> usize {
        self.tasks.delete_by_title(title)
    }

    /// Removes the task with the given identifier.
    pub fn delete_task_by_id(&mut self, id: TaskId) -> Option<Task> {
        self.tasks.delete_by_id(id)
    }

    /// Updates the first task titled exactly `title`. Returns `false` when
    /// none matches.
    pub fn update_task_status(
        &mut self,
        title: &str,
        new_status: TaskStatus,
        clock: &impl Clock,
    ) -> bool {
        self.tasks.update_status_by_title(title, new_status, clock)
    }

    /// Updates the task with the given identifier.
    pub fn update_task_status_by_id(
        &mut self,
        id: TaskId,
        new_status: TaskStatus,
        clock: &impl Clock,
    ) -> Option<&Task> {
        self.tasks.update_status_by_id(id, new_status, clock)
    }

    /// Returns tasks sorted by `sort_by` without reordering the collection.
    #[must_use]
    pub fn get_tasks(&self, sort_by: TaskSortKey) -> Vec<&Task> {
        self.tasks.sorted_by(sort_by)
    }

    /// Returns tasks whose titles contain `keyword`, ignoring case.
    #[must_use]
    pub fn search_tasks(&self, keyword: &str) -> Vec<&Task> {
        self.tasks.search(keyword)
    }
}
