//! Tasktally: an interactive, multi-account task tracker.
//!
//! Users register, log in and manage a private, in-memory list of tasks
//! with titles, due dates, priorities, categories and a three-state status.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: validated task and account types with no I/O
//! - **Ports**: the account repository trait
//! - **Adapters**: the in-memory repository
//! - **Services**: the session, which gates every task operation behind a
//!   login
//!
//! # Modules
//!
//! - [`task`]: task records, validation, sorting and search
//! - [`account`]: credentials, accounts and account storage
//! - [`session`]: registration, login and authenticated task operations
//! - [`cli`]: the interactive menu

pub mod account;
pub mod cli;
pub mod session;
pub mod task;
