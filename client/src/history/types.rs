//! State types for the history screen.

use crate::api::{BalanceEntry, OrderSummary};
use crate::catalog::{Generation, RemoteData};
use crate::types::UserId;

/// Title the backend records cafe orders under. The history tabs split
/// tickets from food-and-beverage orders on exactly this string.
pub const CAFE_ORDER_TITLE: &str = "Pesanan F&B (Café)";

/// Which history tab is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryTab {
    /// Movie ticket orders
    #[default]
    Tickets,
    /// Cafe orders
    Cafe,
    /// Wallet balance mutations
    Balance,
}

/// Full state for the history screen.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryState {
    /// Whose history this is
    pub user: UserId,
    /// Order rows (tickets and cafe together, as the backend returns them)
    pub orders: RemoteData<Vec<OrderSummary>>,
    /// Wallet balance rows
    pub balance: RemoteData<Vec<BalanceEntry>>,
    /// Fetch generation shared by both loads
    pub generation: Generation,
    /// Active tab
    pub tab: HistoryTab,
}

impl HistoryState {
    /// Fresh history screen for a user
    #[must_use]
    pub const fn new(user: UserId) -> Self {
        Self {
            user,
            orders: RemoteData::Loading,
            balance: RemoteData::Loading,
            generation: Generation::new(),
            tab: HistoryTab::Tickets,
        }
    }

    /// Order rows visible under the active tab, a single-pass filter.
    /// Empty on the balance tab.
    #[must_use]
    pub fn visible_orders(&self) -> Vec<&OrderSummary> {
        let Some(orders) = self.orders.ready() else {
            return Vec::new();
        };
        match self.tab {
            HistoryTab::Tickets => orders
                .iter()
                .filter(|o| o.movie_title != CAFE_ORDER_TITLE)
                .collect(),
            HistoryTab::Cafe => orders
                .iter()
                .filter(|o| o.movie_title == CAFE_ORDER_TITLE)
                .collect(),
            HistoryTab::Balance => Vec::new(),
        }
    }
}
