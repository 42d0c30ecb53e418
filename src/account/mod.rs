//! User accounts and the username registry.
//!
//! An account owns its credentials and an ordered [`crate::task::domain::TaskList`].
//! Accounts are created once at registration and live for the lifetime of the
//! registry that stores them; there is no deletion path. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
