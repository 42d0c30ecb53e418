//! Login session state machine.

use crate::account::domain::Username;
use std::fmt;

/// Whether a session has an active login.
///
/// `LoggedOut` is the initial state. A successful login from either state
/// moves to `LoggedIn`, replacing any previous account without confirmation;
/// logout always returns to `LoggedOut`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No account is logged in.
    #[default]
    LoggedOut,
    /// The named account is logged in.
    LoggedIn(Username),
}

impl SessionState {
    /// Returns `true` when an account is logged in.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    /// Returns the logged-in username, if any.
    #[must_use]
    pub const fn username(&self) -> Option<&Username> {
        match self {
            Self::LoggedOut => None,
            Self::LoggedIn(username) => Some(username),
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoggedOut => f.write_str("logged out"),
            Self::LoggedIn(username) => write!(f, "logged in as {username}"),
        }
    }
}
