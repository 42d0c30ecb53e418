//! Domain model for tasks and task collections.
//!
//! Tasks are value-like records whose only mutable field after creation is
//! their status. The [`TaskList`] collection owns tasks in insertion order and
//! provides title-based and identifier-based selection, stable sorting by a
//! closed set of keys, and case-insensitive title search.

mod due_date;
mod error;
mod ids;
mod list;
mod priority;
mod sort;
mod status;
mod task;

pub use due_date::DueDate;
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskCategory, TaskId, TaskTitle};
pub use list::TaskList;
pub use priority::TaskPriority;
pub use sort::TaskSortKey;
pub use status::TaskStatus;
pub use task::{NewTask, Task};
