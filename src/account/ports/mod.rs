//! Port contracts for account storage.
//!
//! Ports define infrastructure-agnostic interfaces used by the session
//! service.

pub mod repository;

pub use repository::{
    AccountRepository, AccountRepositoryError, AccountRepositoryResult, SharedAccount,
};
