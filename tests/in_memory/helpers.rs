//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tasktally::{
    account::adapters::memory::InMemoryAccountRepository,
    session::services::{AddTaskRequest, SessionService},
    task::domain::Task,
};

/// Session type used by the integration tests.
pub type TestSession = SessionService<InMemoryAccountRepository, DefaultClock>;

/// Provides a fresh, shareable repository for each test.
#[fixture]
pub fn repository() -> Arc<InMemoryAccountRepository> {
    Arc::new(InMemoryAccountRepository::new())
}

/// Creates a logged-out session over `repository`.
#[must_use]
pub fn session_over(repository: &Arc<InMemoryAccountRepository>) -> TestSession {
    SessionService::new(Arc::clone(repository), Arc::new(DefaultClock))
}

/// Provides a session logged in as `alice` with password `pw1`.
///
/// # Panics
///
/// Panics if registration or login fails.
#[fixture]
pub fn alice(repository: Arc<InMemoryAccountRepository>) -> TestSession {
    let mut session = session_over(&repository);
    session
        .register("alice", "pw1")
        .expect("registration should succeed");
    session
        .login("alice", "pw1")
        .expect("login should succeed");
    session
}

/// Builds a work task request with the given priority.
#[must_use]
pub fn work_task(title: &str, due_date: &str, priority: &str) -> AddTaskRequest {
    AddTaskRequest::new(title, due_date)
        .with_priority(priority)
        .with_category("Work")
}

/// Returns the due dates of `tasks` as `YYYY-MM-DD` strings.
#[must_use]
pub fn due_dates(tasks: &[Task]) -> Vec<String> {
    tasks
        .iter()
        .map(|task| task.due_date().to_string())
        .collect()
}
