//! Reducer for the cafe screen.

use crate::cafe::environment::CafeEnvironment;
use crate::cafe::{CafeAction, CafePhase, CafeState};
use crate::catalog::RemoteData;
use bioskop_core::{async_effect, effect::Effect, reducer::Reducer};
use smallvec::{smallvec, SmallVec};

/// Cafe cart reducer.
///
/// Submitting an empty cart is a no-op with no network call, and only one
/// submission is in flight at a time. A refused order keeps the cart intact
/// for retry.
#[derive(Clone, Copy, Debug)]
pub struct CafeReducer;

impl CafeReducer {
    /// Create a new cafe reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CafeReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for CafeReducer {
    type State = CafeState;
    type Action = CafeAction;
    type Environment = crate::cafe::environment::ProductionCafeEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CafeAction::Load => {
                state.generation = state.generation.next();
                state.products = RemoteData::Loading;

                let generation = state.generation;
                let backend = env.backend();
                smallvec![async_effect! {
                    match backend.products().await {
                        Ok(products) => Some(CafeAction::ProductsLoaded { generation, products }),
                        Err(err) => Some(CafeAction::ProductsUnavailable {
                            generation,
                            reason: err.to_notice(),
                        }),
                    }
                }]
            }

            CafeAction::ProductsLoaded {
                generation,
                products,
            } => {
                if generation != state.generation {
                    return smallvec![Effect::None];
                }
                state.products = RemoteData::Ready(products);
                smallvec![Effect::None]
            }

            CafeAction::ProductsUnavailable { generation, reason } => {
                if generation != state.generation {
                    return smallvec![Effect::None];
                }
                tracing::warn!(%reason, "product catalog unavailable");
                state.products = RemoteData::Unavailable(reason);
                smallvec![Effect::None]
            }

            CafeAction::AdjustQuantity {
                product_id,
                unit_price,
                delta,
            } => {
                if !state.phase.accepts_input() {
                    return smallvec![Effect::None];
                }
                state.cart.adjust(product_id, unit_price, delta);
                smallvec![Effect::None]
            }

            CafeAction::Submit => {
                if !state.phase.accepts_input() || state.cart.is_empty() {
                    return smallvec![Effect::None];
                }
                state.phase = CafePhase::Submitting;

                let draft = state.draft();
                let backend = env.backend();
                smallvec![async_effect! {
                    match backend.submit_order(draft).await {
                        Ok(()) => Some(CafeAction::SubmitSucceeded),
                        Err(err) => Some(CafeAction::SubmitFailed {
                            reason: err.to_notice(),
                        }),
                    }
                }]
            }

            CafeAction::SubmitSucceeded => {
                if state.phase != CafePhase::Submitting {
                    return smallvec![Effect::None];
                }
                tracing::info!(user = %state.user, "cafe order succeeded");
                state.phase = CafePhase::Succeeded;
                state.cart = crate::types::Cart::new();
                smallvec![Effect::None]
            }

            CafeAction::SubmitFailed { reason } => {
                if state.phase != CafePhase::Submitting {
                    return smallvec![Effect::None];
                }
                tracing::warn!(%reason, "cafe order refused");
                state.phase = CafePhase::Failed(reason);
                smallvec![Effect::None]
            }
        }
    }
}
