//! Reducer for wallet top-up.

use crate::wallet::environment::WalletEnvironment;
use crate::wallet::types::MIN_TOP_UP;
use crate::wallet::{WalletAction, WalletPhase, WalletState};
use bioskop_core::{async_effect, effect::Effect, reducer::Reducer};
use smallvec::{smallvec, SmallVec};

/// Wallet top-up reducer with a single-flight submission guard.
#[derive(Clone, Copy, Debug)]
pub struct WalletReducer;

impl WalletReducer {
    /// Create a new wallet reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for WalletReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for WalletReducer {
    type State = WalletState;
    type Action = WalletAction;
    type Environment = crate::wallet::environment::ProductionWalletEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            WalletAction::SubmitTopUp { amount, method } => {
                if !state.phase.accepts_input() {
                    return smallvec![Effect::None];
                }
                if amount < MIN_TOP_UP {
                    state.notice = Some(format!("Minimal top up {MIN_TOP_UP}"));
                    return smallvec![Effect::None];
                }
                state.notice = None;
                state.phase = WalletPhase::Submitting;

                let user = state.user.clone();
                let backend = env.backend();
                smallvec![async_effect! {
                    match backend.top_up(user, amount, method).await {
                        Ok(()) => Some(WalletAction::TopUpSucceeded),
                        Err(err) => Some(WalletAction::TopUpFailed {
                            reason: err.to_notice(),
                        }),
                    }
                }]
            }

            WalletAction::TopUpSucceeded => {
                if state.phase != WalletPhase::Submitting {
                    return smallvec![Effect::None];
                }
                tracing::info!(user = %state.user, "top-up succeeded");
                state.phase = WalletPhase::Succeeded;
                smallvec![Effect::None]
            }

            WalletAction::TopUpFailed { reason } => {
                if state.phase != WalletPhase::Submitting {
                    return smallvec![Effect::None];
                }
                tracing::warn!(%reason, "top-up refused");
                state.phase = WalletPhase::Failed(reason);
                smallvec![Effect::None]
            }

            WalletAction::DismissNotice => {
                state.notice = None;
                smallvec![Effect::None]
            }
        }
    }
}
