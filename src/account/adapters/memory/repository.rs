//! In-memory account repository.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, Mutex, RwLock};

use crate::account::{
    domain::{Account, Username},
    ports::{AccountRepository, AccountRepositoryError, AccountRepositoryResult, SharedAccount},
};

/// Thread-safe in-memory account repository.
///
/// The username index is guarded by one lock per repository instance; each
/// stored account is additionally guarded by its own lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepository {
    state: Arc<RwLock<HashMap<Username, SharedAccount>>>,
}

impl InMemoryAccountRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn register(&self, account: Account) -> AccountRepositoryResult<SharedAccount> {
        let mut accounts = self
            .state
            .write()
            .map_err(|err| AccountRepositoryError::poisoned(&err))?;

        match accounts.entry(account.username().clone()) {
            Entry::Occupied(existing) => Err(AccountRepositoryError::DuplicateUsername(
                existing.key().clone(),
            )),
            Entry::Vacant(slot) => {
                let shared = Arc::new(Mutex::new(account));
                slot.insert(Arc::clone(&shared));
                Ok(shared)
            }
        }
    }

    fn find_by_username(
        &self,
        username: &Username,
    ) -> AccountRepositoryResult<Option<SharedAccount>> {
        let accounts = self
            .state
            .read()
            .map_err(|err| AccountRepositoryError::poisoned(&err))?;
        Ok(accounts.get(username).cloned())
    }
}
