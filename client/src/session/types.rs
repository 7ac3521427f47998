//! State types for the session guard.

use crate::types::UserId;
use chrono::{DateTime, Utc};

/// Where the session currently stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Startup: the persisted identity has not been read yet.
    /// No routing decisions are made in this state.
    #[default]
    Unresolved,
    /// A user is logged in
    Authenticated(UserId),
    /// Resolved, nobody logged in
    Anonymous,
}

impl SessionStatus {
    /// The logged-in user, if any
    #[must_use]
    pub const fn user(&self) -> Option<&UserId> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unresolved | Self::Anonymous => None,
        }
    }

    /// Whether the startup read has completed (or been superseded by an
    /// explicit login)
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved)
    }
}

/// Full session guard state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Current session status
    pub status: SessionStatus,
    /// A startup resolve is in flight
    pub resolving: bool,
    /// A login or registration request is in flight
    pub authenticating: bool,
    /// Dismissible error notice from the last failed login/registration
    pub notice: Option<String>,
    /// Registration completed; the user still has to log in
    pub registered: bool,
    /// When the session last became resolved
    pub resolved_at: Option<DateTime<Utc>>,
}

impl SessionState {
    /// Fresh unresolved session
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: SessionStatus::Unresolved,
            resolving: false,
            authenticating: false,
            notice: None,
            registered: false,
            resolved_at: None,
        }
    }
}
