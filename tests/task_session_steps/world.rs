//! Shared world state for task session BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tasktally::{
    account::{adapters::memory::InMemoryAccountRepository, domain::Username},
    session::services::{AddTaskRequest, SessionResult, SessionService},
    task::domain::Task,
};

/// Session type used by the BDD world.
pub type TestSession = SessionService<InMemoryAccountRepository, DefaultClock>;

/// Scenario world for task session behaviour tests.
pub struct SessionWorld {
    pub repository: Arc<InMemoryAccountRepository>,
    pub session: TestSession,
    pub last_add_result: Option<SessionResult<Task>>,
    pub last_register_result: Option<SessionResult<Username>>,
    pub login_results: Vec<SessionResult<Username>>,
    pub deleted: Option<usize>,
}

impl SessionWorld {
    /// Creates a world with a logged-out session over an empty registry.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryAccountRepository::new());
        Self {
            session: Self::session_over(&repository),
            repository,
            last_add_result: None,
            last_register_result: None,
            login_results: Vec::new(),
            deleted: None,
        }
    }

    /// Creates another logged-out session over the world's registry.
    #[must_use]
    pub fn fresh_session(&self) -> TestSession {
        Self::session_over(&self.repository)
    }

    fn session_over(repository: &Arc<InMemoryAccountRepository>) -> TestSession {
        SessionService::new(Arc::clone(repository), Arc::new(DefaultClock))
    }
}

impl Default for SessionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SessionWorld {
    SessionWorld::default()
}

/// Builds the add-task request used by the add steps.
#[must_use]
pub fn task_request(priority: &str, category: &str, title: &str, due: &str) -> AddTaskRequest {
    AddTaskRequest::new(title, due)
        .with_priority(priority)
        .with_category(category)
}
