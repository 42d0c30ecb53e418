//! Application services for account sessions.

mod session;

pub use session::{AddTaskRequest, SessionError, SessionResult, SessionService};
