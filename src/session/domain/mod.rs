//! Domain model for the login session.

mod state;

pub use state::SessionState;
