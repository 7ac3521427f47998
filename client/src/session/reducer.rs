//! Reducer for the session guard.

use crate::session::{SessionAction, SessionEnvironment, SessionState, SessionStatus};
use bioskop_core::{async_effect, effect::Effect, reducer::Reducer};
use smallvec::{smallvec, SmallVec};

/// Session guard reducer.
///
/// Resolution is fail-open: any storage error during the startup read
/// degrades to `Anonymous` so a broken key-value file can never lock the
/// user out of the app. Login persists the identity before the observable
/// transition; a failed persist is traced but still logs the user in for
/// the lifetime of the process.
#[derive(Clone, Copy, Debug)]
pub struct SessionReducer;

impl SessionReducer {
    /// Create a new session reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SessionReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for SessionReducer {
    type State = SessionState;
    type Action = SessionAction;
    type Environment = crate::session::environment::ProductionSessionEnvironment;

    #[allow(clippy::too_many_lines)]
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            SessionAction::Resolve => {
                // At most one startup read, ever.
                if state.status != SessionStatus::Unresolved || state.resolving {
                    return smallvec![Effect::None];
                }
                state.resolving = true;

                let store = env.identity_store();
                smallvec![async_effect! {
                    let identity = match store.load().await {
                        Ok(identity) => identity,
                        Err(err) => {
                            tracing::warn!(error = %err, "identity read failed, resolving anonymous");
                            None
                        }
                    };
                    Some(SessionAction::Resolved(identity))
                }]
            }

            SessionAction::Resolved(identity) => {
                // A late read never overrides an already-resolved session.
                if state.status != SessionStatus::Unresolved {
                    return smallvec![Effect::None];
                }
                state.resolving = false;
                state.resolved_at = Some(env.clock().now());
                state.status = match identity {
                    Some(user) => {
                        tracing::info!(user = %user, "session resolved: authenticated");
                        SessionStatus::Authenticated(user)
                    }
                    None => {
                        tracing::info!("session resolved: anonymous");
                        SessionStatus::Anonymous
                    }
                };
                smallvec![Effect::None]
            }

            SessionAction::Authenticate { username, password } => {
                if state.authenticating {
                    return smallvec![Effect::None];
                }
                state.authenticating = true;
                state.notice = None;

                let backend = env.backend();
                smallvec![async_effect! {
                    match backend.login(username, password).await {
                        Ok(identity) => Some(SessionAction::Login { identity }),
                        Err(err) => Some(SessionAction::AuthenticationFailed {
                            reason: err.to_notice(),
                        }),
                    }
                }]
            }

            SessionAction::Register {
                username,
                full_name,
                password,
            } => {
                if state.authenticating {
                    return smallvec![Effect::None];
                }
                state.authenticating = true;
                state.notice = None;
                state.registered = false;

                let backend = env.backend();
                smallvec![async_effect! {
                    match backend.register(username, full_name, password).await {
                        Ok(()) => Some(SessionAction::RegistrationSucceeded),
                        Err(err) => Some(SessionAction::AuthenticationFailed {
                            reason: err.to_notice(),
                        }),
                    }
                }]
            }

            SessionAction::AuthenticationFailed { reason } => {
                state.authenticating = false;
                state.notice = Some(reason);
                smallvec![Effect::None]
            }

            SessionAction::RegistrationSucceeded => {
                state.authenticating = false;
                state.registered = true;
                smallvec![Effect::None]
            }

            SessionAction::Login { identity } => {
                // Persist first; the transition happens on LoggedIn.
                let store = env.identity_store();
                smallvec![async_effect! {
                    if let Err(err) = store.save(identity.clone()).await {
                        tracing::warn!(error = %err, "identity persist failed, session-only login");
                    }
                    Some(SessionAction::LoggedIn { identity })
                }]
            }

            SessionAction::LoggedIn { identity } => {
                tracing::info!(user = %identity, "logged in");
                state.authenticating = false;
                state.resolving = false;
                state.resolved_at = Some(env.clock().now());
                state.status = SessionStatus::Authenticated(identity);
                smallvec![Effect::None]
            }

            SessionAction::Logout => {
                let store = env.identity_store();
                smallvec![async_effect! {
                    if let Err(err) = store.clear().await {
                        tracing::warn!(error = %err, "identity clear failed");
                    }
                    Some(SessionAction::LoggedOut)
                }]
            }

            SessionAction::LoggedOut => {
                tracing::info!("logged out");
                state.status = SessionStatus::Anonymous;
                smallvec![Effect::None]
            }

            SessionAction::DismissNotice => {
                state.notice = None;
                smallvec![Effect::None]
            }
        }
    }
}
