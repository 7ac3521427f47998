//! Pure navigation contract derived from session status.
//!
//! The routing layer (out of scope here) calls [`directive`] on every
//! session or navigation change and follows the answer. Keeping this a pure
//! function makes the guard rules trivially testable.

use crate::session::types::SessionStatus;

/// Which flow the user is currently inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Login / registration screens
    Auth,
    /// Protected application screens
    Main,
}

/// What the routing layer should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    /// Session still unresolved: show the splash, decide nothing
    ShowLoading,
    /// Authenticated user sitting in the auth flow
    RedirectToMain,
    /// Anonymous user sitting in the protected flow
    RedirectToLogin,
    /// Current placement is correct
    Stay,
}

/// Guard rule for one (status, flow) pair.
#[must_use]
pub const fn directive(status: &SessionStatus, current: Flow) -> Directive {
    match (status, current) {
        // Never redirect on an unresolved session.
        (SessionStatus::Unresolved, _) => Directive::ShowLoading,
        (SessionStatus::Authenticated(_), Flow::Auth) => Directive::RedirectToMain,
        (SessionStatus::Anonymous, Flow::Main) => Directive::RedirectToLogin,
        (SessionStatus::Authenticated(_), Flow::Main) | (SessionStatus::Anonymous, Flow::Auth) => {
            Directive::Stay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserId;

    #[test]
    fn unresolved_never_redirects() {
        assert_eq!(
            directive(&SessionStatus::Unresolved, Flow::Auth),
            Directive::ShowLoading
        );
        assert_eq!(
            directive(&SessionStatus::Unresolved, Flow::Main),
            Directive::ShowLoading
        );
    }

    #[test]
    fn authenticated_leaves_auth_flow() {
        let status = SessionStatus::Authenticated(UserId::new("budi"));
        assert_eq!(directive(&status, Flow::Auth), Directive::RedirectToMain);
        assert_eq!(directive(&status, Flow::Main), Directive::Stay);
    }

    #[test]
    fn anonymous_is_evicted_from_main_flow() {
        assert_eq!(
            directive(&SessionStatus::Anonymous, Flow::Main),
            Directive::RedirectToLogin
        );
        assert_eq!(
            directive(&SessionStatus::Anonymous, Flow::Auth),
            Directive::Stay
        );
    }
}
