//! Repository port mapping usernames to accounts.

use crate::account::domain::{Account, Username};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Handle to a stored account.
///
/// Each account sits behind its own lock so concurrent sessions serialize
/// their task mutations per account.
pub type SharedAccount = Arc<Mutex<Account>>;

/// Result type for account repository operations.
pub type AccountRepositoryResult<T> = Result<T, AccountRepositoryError>;

/// Account storage contract.
pub trait AccountRepository: Send + Sync {
    /// Stores a newly registered account and returns its shared handle.
    ///
    /// # Errors
    ///
    /// Returns [`AccountRepositoryError::DuplicateUsername`] when the username
    /// is already taken. The existing account is left untouched.
    fn register(&self, account: Account) -> AccountRepositoryResult<SharedAccount>;

    /// Finds an account by exact, case-sensitive username.
    ///
    /// Returns `None` when no account has the username.
    fn find_by_username(
        &self,
        username: &Username,
    ) -> AccountRepositoryResult<Option<SharedAccount>>;
}

/// Errors returned by account repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AccountRepositoryError {
    /// An account with the same username already exists.
    #[error("duplicate username: {0}")]
    DuplicateUsername(Username),

    /// Storage-layer failure, including a poisoned lock.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AccountRepositoryError {
    /// Wraps a storage error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Wraps a poisoned-lock error, which carries a guard and cannot be
    /// stored directly.
    pub fn poisoned(err: &impl std::fmt::Display) -> Self {
        Self::persistence(std::io::Error::other(err.to_string()))
    }
}
