//! Session guard tests: resolution, fail-open, login/logout, auth flows.

#![allow(clippy::unwrap_used)]

use crate::api::MockCinemaBackend;
use crate::session::environment::ProductionSessionEnvironment;
use crate::session::storage::{IdentityStore, MemoryIdentityStore};
use crate::session::{SessionAction, SessionReducer, SessionState, SessionStatus};
use crate::types::UserId;
use bioskop_core::reducer::Reducer;
use bioskop_runtime::Store;
use bioskop_testing::test_clock;
use std::sync::Arc;
use std::time::Duration;

type SessionStore = Store<SessionState, SessionAction, ProductionSessionEnvironment, SessionReducer>;

fn env_with(identity_store: Arc<dyn IdentityStore>) -> ProductionSessionEnvironment {
    ProductionSessionEnvironment::new(
        MockCinemaBackend::new().with_user("budi", "rahasia").shared(),
        identity_store,
        Arc::new(test_clock()),
    )
}

fn store_with(identity_store: Arc<dyn IdentityStore>) -> SessionStore {
    Store::new(SessionState::new(), SessionReducer::new(), env_with(identity_store))
}

const WAIT: Duration = Duration::from_secs(2);

#[tokio::test]
async fn persisted_identity_resolves_authenticated() {
    let store = store_with(MemoryIdentityStore::with_identity("budi").shared());

    store
        .send_and_wait_for(
            SessionAction::Resolve,
            |a| matches!(a, SessionAction::Resolved(_)),
            WAIT,
        )
        .await
        .unwrap();

    let status = store.state(|s| s.status.clone()).await;
    assert_eq!(status, SessionStatus::Authenticated(UserId::new("budi")));
    assert!(store.state(|s| s.resolved_at.is_some()).await);
}

#[tokio::test]
async fn absent_identity_resolves_anonymous() {
    let store = store_with(MemoryIdentityStore::new().shared());

    store
        .send_and_wait_for(
            SessionAction::Resolve,
            |a| matches!(a, SessionAction::Resolved(_)),
            WAIT,
        )
        .await
        .unwrap();

    assert_eq!(store.state(|s| s.status.clone()).await, SessionStatus::Anonymous);
}

#[tokio::test]
async fn storage_failure_resolves_anonymous_fail_open() {
    let store = store_with(MemoryIdentityStore::failing().shared());

    store
        .send_and_wait_for(
            SessionAction::Resolve,
            |a| matches!(a, SessionAction::Resolved(_)),
            WAIT,
        )
        .await
        .unwrap();

    // Broken storage never locks the user out of the app.
    assert_eq!(store.state(|s| s.status.clone()).await, SessionStatus::Anonymous);
}

#[test]
fn resolve_is_single_flight() {
    let env = env_with(MemoryIdentityStore::new().shared());
    let reducer = SessionReducer::new();
    let mut state = SessionState::new();

    let first = reducer.reduce(&mut state, SessionAction::Resolve, &env);
    assert!(!first[0].is_none());
    assert!(state.resolving);

    // A second Resolve while the read is in flight produces no work.
    let second = reducer.reduce(&mut state, SessionAction::Resolve, &env);
    assert!(second.iter().all(bioskop_core::effect::Effect::is_none));
}

#[test]
fn late_resolved_never_overrides_explicit_login() {
    let env = env_with(MemoryIdentityStore::new().shared());
    let reducer = SessionReducer::new();
    let mut state = SessionState::new();

    reducer.reduce(
        &mut state,
        SessionAction::LoggedIn {
            identity: UserId::new("budi"),
        },
        &env,
    );

    // The startup read completing afterwards is discarded.
    reducer.reduce(&mut state, SessionAction::Resolved(None), &env);
    assert_eq!(state.status, SessionStatus::Authenticated(UserId::new("budi")));
}

#[tokio::test]
async fn login_persists_identity_before_transition() {
    let memory = Arc::new(MemoryIdentityStore::new());
    let dyn_store: Arc<dyn IdentityStore> = memory.clone();
    let store = store_with(dyn_store);

    store
        .send_and_wait_for(
            SessionAction::Login {
                identity: UserId::new("budi"),
            },
            |a| matches!(a, SessionAction::LoggedIn { .. }),
            WAIT,
        )
        .await
        .unwrap();

    assert_eq!(memory.current(), Some(UserId::new("budi")));
    assert_eq!(
        store.state(|s| s.status.clone()).await,
        SessionStatus::Authenticated(UserId::new("budi"))
    );
}

#[tokio::test]
async fn logout_clears_identity_and_ends_anonymous() {
    let memory = Arc::new(MemoryIdentityStore::with_identity("budi"));
    let dyn_store: Arc<dyn IdentityStore> = memory.clone();
    let store = store_with(dyn_store);

    store
        .send_and_wait_for(
            SessionAction::Resolve,
            |a| matches!(a, SessionAction::Resolved(_)),
            WAIT,
        )
        .await
        .unwrap();

    store
        .send_and_wait_for(
            SessionAction::Logout,
            |a| matches!(a, SessionAction::LoggedOut),
            WAIT,
        )
        .await
        .unwrap();

    assert_eq!(store.state(|s| s.status.clone()).await, SessionStatus::Anonymous);
    assert_eq!(memory.current(), None);
}

#[tokio::test]
async fn authenticate_success_chains_into_login() {
    let memory = Arc::new(MemoryIdentityStore::new());
    let dyn_store: Arc<dyn IdentityStore> = memory.clone();
    let store = store_with(dyn_store);

    store
        .send_and_wait_for(
            SessionAction::Authenticate {
                username: "budi".to_string(),
                password: "rahasia".to_string(),
            },
            |a| matches!(a, SessionAction::LoggedIn { .. }),
            WAIT,
        )
        .await
        .unwrap();

    assert_eq!(
        store.state(|s| s.status.clone()).await,
        SessionStatus::Authenticated(UserId::new("budi"))
    );
    assert_eq!(memory.current(), Some(UserId::new("budi")));
}

#[tokio::test]
async fn authenticate_rejection_sets_notice_and_stays_put() {
    let store = store_with(MemoryIdentityStore::new().shared());

    store
        .send_and_wait_for(
            SessionAction::Authenticate {
                username: "budi".to_string(),
                password: "salah".to_string(),
            },
            |a| matches!(a, SessionAction::AuthenticationFailed { .. }),
            WAIT,
        )
        .await
        .unwrap();

    let (status, notice, authenticating) = store
        .state(|s| (s.status.clone(), s.notice.clone(), s.authenticating))
        .await;
    assert_eq!(status, SessionStatus::Unresolved);
    assert_eq!(notice, Some("Username atau password salah".to_string()));
    assert!(!authenticating);
}

#[tokio::test]
async fn registration_success_does_not_log_in() {
    let store = store_with(MemoryIdentityStore::new().shared());

    store
        .send_and_wait_for(
            SessionAction::Register {
                username: "sari".to_string(),
                full_name: "Sari Dewi".to_string(),
                password: "rahasia".to_string(),
            },
            |a| matches!(a, SessionAction::RegistrationSucceeded),
            WAIT,
        )
        .await
        .unwrap();

    let (status, registered) = store.state(|s| (s.status.clone(), s.registered)).await;
    assert_eq!(status, SessionStatus::Unresolved);
    assert!(registered);
}

#[test]
fn dismiss_clears_notice() {
    let env = env_with(MemoryIdentityStore::new().shared());
    let reducer = SessionReducer::new();
    let mut state = SessionState {
        notice: Some("Gagal".to_string()),
        ..SessionState::new()
    };

    reducer.reduce(&mut state, SessionAction::DismissNotice, &env);
    assert_eq!(state.notice, None);
}
