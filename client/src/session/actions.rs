//! Actions for the session guard.

use crate::types::UserId;

/// Inputs to the session reducer: user intents plus effect feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Read the persisted identity. Ignored unless the session is still
    /// `Unresolved` with no read already in flight, so the startup read
    /// happens at most once.
    Resolve,

    /// Feedback: the persisted identity (or nothing) was read.
    /// Ignored once the session is already resolved.
    Resolved(Option<UserId>),

    /// Submit credentials to the backend.
    Authenticate {
        /// Login handle
        username: String,
        /// Password, sent form-encoded
        password: String,
    },

    /// Create an account. On success the user still has to log in.
    Register {
        /// Desired login handle
        username: String,
        /// Display name
        full_name: String,
        /// Password
        password: String,
    },

    /// Feedback: backend refused the login or registration.
    AuthenticationFailed {
        /// Dismissible reason shown to the user
        reason: String,
    },

    /// Feedback: registration accepted.
    RegistrationSucceeded,

    /// Persist an identity and log in. The persist runs first; the
    /// observable transition happens on `LoggedIn`.
    Login {
        /// Identity to persist
        identity: UserId,
    },

    /// Feedback: identity persisted (or persistence failed, which is traced
    /// but still logs the user in for this process).
    LoggedIn {
        /// Identity now authenticated
        identity: UserId,
    },

    /// Clear the persisted identity and become anonymous.
    Logout,

    /// Feedback: persisted identity cleared.
    LoggedOut,

    /// Dismiss the current error notice.
    DismissNotice,
}
