//! Wallet tests: minimum amount guard, single flight, form values.

#![allow(clippy::unwrap_used)]

use crate::api::{ApiError, MockCinemaBackend, TopUpMethod};
use crate::wallet::environment::ProductionWalletEnvironment;
use crate::wallet::{WalletAction, WalletPhase, WalletReducer, WalletState, MIN_TOP_UP, QUICK_AMOUNTS};
use crate::types::{Rupiah, UserId};
use bioskop_core::reducer::Reducer;
use bioskop_runtime::Store;
use std::sync::Arc;
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(2);

fn env(backend: Arc<MockCinemaBackend>) -> ProductionWalletEnvironment {
    ProductionWalletEnvironment::new(backend)
}

#[test]
fn below_minimum_is_rejected_without_network_call() {
    let backend = Arc::new(MockCinemaBackend::new());
    let reducer = WalletReducer::new();
    let mut state = WalletState::new(UserId::new("budi"));

    let effects = reducer.reduce(
        &mut state,
        WalletAction::SubmitTopUp {
            amount: Rupiah::new(9_999),
            method: TopUpMethod::EWallet,
        },
        &env(Arc::clone(&backend)),
    );

    assert!(effects.iter().all(bioskop_core::effect::Effect::is_none));
    assert_eq!(state.phase, WalletPhase::Idle);
    assert!(state.notice.is_some());
    assert!(backend.recorded_top_ups().is_empty());
}

#[test]
fn quick_amounts_all_clear_the_minimum() {
    for amount in QUICK_AMOUNTS {
        assert!(amount >= MIN_TOP_UP);
    }
}

#[test]
fn submit_while_submitting_is_a_noop() {
    let backend = Arc::new(MockCinemaBackend::new());
    let reducer = WalletReducer::new();
    let mut state = WalletState::new(UserId::new("budi"));
    state.phase = WalletPhase::Submitting;

    let effects = reducer.reduce(
        &mut state,
        WalletAction::SubmitTopUp {
            amount: Rupiah::new(50_000),
            method: TopUpMethod::BankTransfer,
        },
        &env(backend),
    );
    assert!(effects.iter().all(bioskop_core::effect::Effect::is_none));
}

#[tokio::test]
async fn accepted_top_up_records_amount_and_method() {
    let backend = Arc::new(MockCinemaBackend::new());
    let store = Store::new(
        WalletState::new(UserId::new("budi")),
        WalletReducer::new(),
        env(Arc::clone(&backend)),
    );

    store
        .send_and_wait_for(
            WalletAction::SubmitTopUp {
                amount: Rupiah::new(100_000),
                method: TopUpMethod::BankTransfer,
            },
            |a| matches!(a, WalletAction::TopUpSucceeded),
            WAIT,
        )
        .await
        .unwrap();

    assert_eq!(store.state(|s| s.phase.clone()).await, WalletPhase::Succeeded);
    let recorded = backend.recorded_top_ups();
    assert_eq!(
        recorded,
        vec![(
            UserId::new("budi"),
            Rupiah::new(100_000),
            TopUpMethod::BankTransfer
        )]
    );
}

#[tokio::test]
async fn refused_top_up_lands_failed_and_allows_retry() {
    let backend = Arc::new(
        MockCinemaBackend::new().with_top_up_responses(vec![Err(ApiError::Rejected {
            message: Some("Saldo gagal ditambahkan".to_string()),
        })]),
    );
    let store = Store::new(
        WalletState::new(UserId::new("budi")),
        WalletReducer::new(),
        env(Arc::clone(&backend)),
    );

    store
        .send_and_wait_for(
            WalletAction::SubmitTopUp {
                amount: Rupiah::new(50_000),
                method: TopUpMethod::CreditCard,
            },
            |a| matches!(a, WalletAction::TopUpFailed { .. }),
            WAIT,
        )
        .await
        .unwrap();
    assert_eq!(
        store.state(|s| s.phase.clone()).await,
        WalletPhase::Failed("Saldo gagal ditambahkan".to_string())
    );

    // Retry from Failed goes through (queue exhausted, mock succeeds).
    store
        .send_and_wait_for(
            WalletAction::SubmitTopUp {
                amount: Rupiah::new(50_000),
                method: TopUpMethod::CreditCard,
            },
            |a| matches!(a, WalletAction::TopUpSucceeded),
            WAIT,
        )
        .await
        .unwrap();
    assert_eq!(store.state(|s| s.phase.clone()).await, WalletPhase::Succeeded);
}
