//! Reducer for the history screen.

use crate::catalog::loaders;
use crate::history::environment::HistoryEnvironment;
use crate::history::{HistoryAction, HistoryState};
use bioskop_core::{async_effect, effect::Effect, reducer::Reducer};
use smallvec::{smallvec, SmallVec};

/// History reducer: two parallel loads, one generation.
#[derive(Clone, Copy, Debug)]
pub struct HistoryReducer;

impl HistoryReducer {
    /// Create a new history reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HistoryReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for HistoryReducer {
    type State = HistoryState;
    type Action = HistoryAction;
    type Environment = crate::history::environment::ProductionHistoryEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            HistoryAction::Load => {
                state.generation = state.generation.next();
                state.orders = crate::catalog::RemoteData::Loading;
                state.balance = crate::catalog::RemoteData::Loading;

                let generation = state.generation;
                let user = state.user.clone();

                let orders_backend = env.backend();
                let orders_user = user.clone();
                let orders = async_effect! {
                    let data = match orders_backend.order_history(orders_user).await {
                        Ok(orders) => crate::catalog::RemoteData::Ready(orders),
                        Err(err) => crate::catalog::RemoteData::Unavailable(err.to_notice()),
                    };
                    Some(HistoryAction::OrdersSettled { generation, data })
                };

                let balance_backend = env.backend();
                let balance = async_effect! {
                    let data = loaders::balance_history(balance_backend.as_ref(), user).await;
                    Some(HistoryAction::BalanceSettled { generation, data })
                };

                smallvec![Effect::merge(vec![orders, balance])]
            }

            HistoryAction::OrdersSettled { generation, data } => {
                if generation != state.generation {
                    return smallvec![Effect::None];
                }
                state.orders = data;
                smallvec![Effect::None]
            }

            HistoryAction::BalanceSettled { generation, data } => {
                if generation != state.generation {
                    return smallvec![Effect::None];
                }
                state.balance = data;
                smallvec![Effect::None]
            }

            HistoryAction::SelectTab(tab) => {
                state.tab = tab;
                smallvec![Effect::None]
            }
        }
    }
}
