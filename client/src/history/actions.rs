//! Actions for the history screen.

use crate::api::{BalanceEntry, OrderSummary};
use crate::catalog::{Generation, RemoteData};
use crate::history::types::HistoryTab;

/// Inputs to the history reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryAction {
    /// Fetch order and balance history, in parallel.
    Load,

    /// Feedback: the order fetch settled (ready or unavailable).
    OrdersSettled {
        /// Generation of the fetch that produced this
        generation: Generation,
        /// Outcome
        data: RemoteData<Vec<OrderSummary>>,
    },

    /// Feedback: the balance fetch settled.
    BalanceSettled {
        /// Generation of the fetch that produced this
        generation: Generation,
        /// Outcome
        data: RemoteData<Vec<BalanceEntry>>,
    },

    /// Switch the active tab. Pure state change, no fetch.
    SelectTab(HistoryTab),
}
