//! Task records and the per-account task collection.
//!
//! A task never exists on its own: it is created inside an account's
//! [`domain::TaskList`] and destroyed when removed from it. This module holds
//! only domain types; storage and session gating live in [`crate::account`]
//! and [`crate::session`].

pub mod domain;
