//! Service layer for registration, login and authenticated task operations.
//!
//! Provides [`SessionService`], which owns the single current-login slot and
//! delegates task operations to the logged-in account.

use crate::{
    account::{
        domain::{Account, AccountDomainError, Password, Username},
        ports::{AccountRepository, AccountRepositoryError, SharedAccount},
    },
    session::domain::SessionState,
    task::domain::{
        DueDate, NewTask, Task, TaskCategory, TaskDomainError, TaskId, TaskPriority,
        TaskSortKey, TaskStatus, TaskTitle,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for adding a task to the logged-in account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    title: String,
    due_date: String,
    description: Option<String>,
    priority: Option<String>,
    category: Option<String>,
}

impl AddTaskRequest {
    /// Creates a request with the required title and `YYYY-MM-DD` due date.
    #[must_use]
    pub fn new(title: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            due_date: due_date.into(),
            description: None,
            priority: None,
            category: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority as free text (`High`, `Medium` or `Low`, any case).
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the category. Blank text falls back to the default category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Validates the request in title, due date, priority order.
    fn into_new_task(self) -> Result<NewTask, TaskDomainError> {
        let title = TaskTitle::new(self.title)?;
        let due_date = DueDate::parse(&self.due_date)?;
        let priority = self
            .priority
            .as_deref()
            .map(TaskPriority::try_from)
            .transpose()?
            .unwrap_or_default();
        let category = self.category.map(TaskCategory::new).unwrap_or_default();
        let description = self
            .description
            .map(|text| text.trim().to_owned())
            .unwrap_or_default();

        Ok(NewTask::new(title, due_date)
            .with_description(description)
            .with_priority(priority)
            .with_category(category))
    }
}

/// Service-level errors for session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Username or password failed validation.
    #[error(transparent)]
    Account(#[from] AccountDomainError),

    /// Task input failed validation, or an unknown sort key was requested.
    #[error(transparent)]
    Task(#[from] TaskDomainError),

    /// The username is already registered.
    #[error("username already exists: {0}")]
    DuplicateAccount(Username),

    /// Login failed. Unknown usernames and wrong passwords are not
    /// distinguished.
    #[error("invalid credentials")]
    Authentication,

    /// The operation requires a logged-in account.
    #[error("you must be logged in")]
    NotAuthenticated,

    /// No task with the identifier belongs to the logged-in account.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(AccountRepositoryError),
}

impl From<AccountRepositoryError> for SessionError {
    fn from(err: AccountRepositoryError) -> Self {
        match err {
            AccountRepositoryError::DuplicateUsername(username) => {
                Self::DuplicateAccount(username)
            }
            other @ AccountRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Result type for session service operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// The account currently logged in.
struct ActiveAccount {
    username: Username,
    account: SharedAccount,
}

/// Registry and single-login session over an account repository.
///
/// One instance drives one logical user sequentially. Several instances may
/// share a repository; the repository's per-account locks serialize their
/// task mutations.
pub struct SessionService<R, C>
where
    R: AccountRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    current: Option<ActiveAccount>,
}

impl<R, C> SessionService<R, C>
where
    R: AccountRepository,
    C: Clock + Send + Sync,
{
    /// Creates a logged-out session over the given repository.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            current: None,
        }
    }

    /// Returns the session state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.current
            .as_ref()
            .map_or(SessionState::LoggedOut, |active| {
                SessionState::LoggedIn(active.username.clone())
            })
    }

    /// Returns the logged-in username, if any.
    #[must_use]
    pub fn current_username(&self) -> Option<&Username> {
        self.current.as_ref().map(|active| &active.username)
    }

    /// Registers a new account. Does not log it in.
    ///
    /// Both values are trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Account`] when the username or password is
    /// blank, [`SessionError::DuplicateAccount`] when the username is taken,
    /// or [`SessionError::Repository`] when storage fails.
    pub fn register(&self, username: &str, password: &str) -> SessionResult<Username> {
        let name = Username::new(username)?;
        let secret = Password::new(password)?;
        let account = Account::new(name.clone(), secret, &*self.clock);
        self.repository.register(account)?;
        log::info!("registered account '{name}'");
        Ok(name)
    }

    /// Logs in, replacing any account already logged in.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Authentication`] when the username is unknown
    /// or the password does not match, or [`SessionError::Repository`] when
    /// storage fails. A failed login leaves the current session unchanged.
    pub fn login(&mut self, username: &str, password: &str) -> SessionResult<Username> {
        let Ok(name) = Username::new(username) else {
            log::warn!("rejected login with blank username");
            return Err(SessionError::Authentication);
        };
        let Some(account) = self.repository.find_by_username(&name)? else {
            log::warn!("failed login attempt for '{name}'");
            return Err(SessionError::Authentication);
        };

        let verified = account
            .lock()
            .map_err(|err| AccountRepositoryError::poisoned(&err))?
            .verify_password(password);
        if !verified {
            log::warn!("failed login attempt for '{name}'");
            return Err(SessionError::Authentication);
        }

        if let Some(previous) = self.current.as_ref() {
            log::info!(
                "session for '{}' replaced by login of '{name}'",
                previous.username
            );
        }
        log::info!("'{name}' logged in");
        self.current = Some(ActiveAccount {
            username: name.clone(),
            account,
        });
        Ok(name)
    }

    /// Logs out, returning the account that was logged in. Logging out
    /// while logged out does nothing.
    pub fn logout(&mut self) -> Option<Username> {
        let previous = self.current.take().map(|active| active.username);
        if let Some(username) = previous.as_ref() {
            log::info!("'{username}' logged out");
        }
        previous
    }

    /// Adds a task to the logged-in account.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAuthenticated`] when logged out, or
    /// [`SessionError::Task`] with [`TaskDomainError::EmptyTitle`],
    /// [`TaskDomainError::InvalidDueDate`] or
    /// [`TaskDomainError::InvalidPriority`] when validation fails. Nothing is
    /// added on failure.
    pub fn add_task(&self, request: AddTaskRequest) -> SessionResult<Task> {
        self.require_login()?;
        let task = Task::new(request.into_new_task()?, &*self.clock);
        let created = task.clone();
        self.with_account(|account| account.add_task(task))?;
        log::debug!("added task {} '{}'", created.id(), created.title());
        Ok(created)
    }

    /// Returns snapshots of the logged-in account's tasks sorted by
    /// `sort_by`. The stored order is not changed.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAuthenticated`] when logged out.
    pub fn view_tasks(&self, sort_by: TaskSortKey) -> SessionResult<Vec<Task>> {
        self.with_account(|account| {
            account
                .get_tasks(sort_by)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    /// Like [`Self::view_tasks`], naming the sort attribute as text.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAuthenticated`] when logged out, or
    /// [`SessionError::Task`] with [`TaskDomainError::UnknownSortKey`] when
    /// `sort_by` names no sortable attribute.
    pub fn view_tasks_sorted_by(&self, sort_by: &str) -> SessionResult<Vec<Task>> {
        self.require_login()?;
        self.view_tasks(TaskSortKey::try_from(sort_by)?)
    }

    /// Returns snapshots of tasks whose titles contain `keyword`, ignoring
    /// case, in stored order. An empty keyword returns every task.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAuthenticated`] when logged out.
    pub fn search_tasks(&self, keyword: &str) -> SessionResult<Vec<Task>> {
        self.with_account(|account| {
            account
                .search_tasks(keyword)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    /// Sets the status of the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAuthenticated`] when logged out or
    /// [`SessionError::TaskNotFound`] when the account has no such task.
    pub fn update_task(&self, id: TaskId, new_status: TaskStatus) -> SessionResult<Task> {
        let clock = &*self.clock;
        let updated = self
            .with_account(|account| {
                account
                    .update_task_status_by_id(id, new_status, clock)
                    .cloned()
            })?
            .ok_or(SessionError::TaskNotFound(id))?;
        log::debug!("task {id} set to {new_status}");
        Ok(updated)
    }

    /// Deletes the task with the given identifier and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAuthenticated`] when logged out or
    /// [`SessionError::TaskNotFound`] when the account has no such task.
    pub fn delete_task(&self, id: TaskId) -> SessionResult<Task> {
        let removed = self
            .with_account(|account| account.delete_task_by_id(id))?
            .ok_or(SessionError::TaskNotFound(id))?;
        log::debug!("deleted task {id} '{}'", removed.title());
        Ok(removed)
    }

    /// Sets the status of the first task, in stored order, titled exactly
    /// `title`. Returns `false` when no task has the title.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAuthenticated`] when logged out.
    pub fn update_task_status_by_title(
        &self,
        title: &str,
        new_status: TaskStatus,
    ) -> SessionResult<bool> {
        let clock = &*self.clock;
        let updated =
            self.with_account(|account| account.update_task_status(title, new_status, clock))?;
        log::debug!("status update by title '{title}' matched: {updated}");
        Ok(updated)
    }

    /// Deletes every task titled exactly `title` and returns how many were
    /// removed. Removing nothing is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAuthenticated`] when logged out.
    pub fn delete_tasks_by_title(&self, title: &str) -> SessionResult<usize> {
        let removed = self.with_account(|account| account.delete_task(title))?;
        log::debug!("deleted {removed} task(s) titled '{title}'");
        Ok(removed)
    }

    fn require_login(&self) -> SessionResult<&ActiveAccount> {
        self.current.as_ref().ok_or(SessionError::NotAuthenticated)
    }

    /// Runs `operation` against the logged-in account while holding its lock.
    fn with_account<T>(&self, operation: impl FnOnce(&mut Account) -> T) -> SessionResult<T> {
        let active = self.require_login()?;
        let mut account = active
            .account
            .lock()
            .map_err(|err| AccountRepositoryError::poisoned(&err))?;
        Ok(operation(&mut *account))
    }
}
