//! Account registration, login sessions and authenticated task operations.
//!
//! [`services::SessionService`] is the registry: it maps usernames to
//! accounts through an [`crate::account::ports::AccountRepository`] and tracks
//! at most one logged-in account. Every task operation is gated here, so
//! accounts themselves carry no authentication state.
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod services;
