//! Domain model for user accounts.
//!
//! Accounts carry no notion of authentication state; whether an account is
//! logged in is decided by [`crate::session`].

mod account;
mod credentials;
mod error;

pub use account::Account;
pub use credentials::{Password, Username};
pub use error::AccountDomainError;
