//! Ordered task collection owned by an account.

use super::{Task, TaskId, TaskSortKey, TaskStatus};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Tasks in insertion order.
///
/// Title-based operations deliberately differ: [`Self::delete_by_title`]
/// removes every match while [`Self::update_status_by_title`] touches only
/// the first. Identifier-based variants select exactly one task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Returns the number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the collection holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterates tasks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Appends a task. Titles are not checked for uniqueness.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes every task whose title equals `title` exactly and returns how
    /// many were removed. Removing nothing is not an error.
    pub fn delete_by_title(&mut self, title: &str) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.title().as_str() != title);
        before.saturating_sub(self.tasks.len())
    }

    /// Removes the task with the given identifier, returning it when present.
    pub fn delete_by_id(&mut self, id: TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == id)?;
        Some(self.tasks.remove(position))
    }

    /// Updates the status of the first task, in insertion order, whose title
    /// equals `title` exactly. Returns `false` when no task matches.
    pub fn update_status_by_title(
        &mut self,
        title: &str,
        new_status: TaskStatus,
        clock: &impl Clock,
    ) -> bool {
        let Some(task) = self
            .tasks
            .iter_mut()
            .find(|task| task.title().as_str() == title)
        else {
            return false;
        };
        task.update_status(new_status, clock);
        true
    }

    /// Updates the status of the task with the given identifier, returning the
    /// updated task when present.
    pub fn update_status_by_id(
        &mut self,
        id: TaskId,
        new_status: TaskStatus,
        clock: &impl Clock,
    ) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|task| task.id() == id)?;
        task.update_status(new_status, clock);
        Some(&*task)
    }

    /// Returns tasks sorted ascending by `key` without reordering the
    /// collection. Ties keep insertion order.
    #[must_use]
    pub fn sorted_by(&self, key: TaskSortKey) -> Vec<&Task> {
        let mut view: Vec<&Task> = self.tasks.iter().collect();
        view.sort_by(|left, right| key.compare(left, right));
        view
    }

    /// Returns tasks whose title contains `keyword`, ignoring case, in
    /// insertion order. An empty keyword matches every task.
    #[must_use]
    pub fn search(&self, keyword: &str) -> Vec<&Task> {
        let needle = keyword.to_lowercase();
        self.tasks
            .iter()
            .filter(|task| task.title().as_str().to_lowercase().contains(&needle))
            .collect()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
