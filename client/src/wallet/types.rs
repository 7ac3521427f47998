//! State types for wallet top-up.

use crate::types::{Rupiah, UserId};

/// Minimum accepted top-up amount.
pub const MIN_TOP_UP: Rupiah = Rupiah(10_000);

/// Quick-pick amounts offered on the top-up screen.
pub const QUICK_AMOUNTS: [Rupiah; 4] = [
    Rupiah(50_000),
    Rupiah(100_000),
    Rupiah(200_000),
    Rupiah(500_000),
];

/// Submission phase for a top-up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WalletPhase {
    /// Ready for a top-up
    #[default]
    Idle,
    /// A top-up is in flight
    Submitting,
    /// The top-up went through
    Succeeded,
    /// The backend refused the top-up
    Failed(String),
}

impl WalletPhase {
    /// Whether a new top-up can be submitted
    #[must_use]
    pub const fn accepts_input(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed(_) | Self::Succeeded)
    }
}

/// Full state for the top-up screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletState {
    /// The user topping up
    pub user: UserId,
    /// Submission phase
    pub phase: WalletPhase,
    /// Local validation notice (below-minimum amount)
    pub notice: Option<String>,
}

impl WalletState {
    /// Fresh top-up screen for a user
    #[must_use]
    pub const fn new(user: UserId) -> Self {
        Self {
            user,
            phase: WalletPhase::Idle,
            notice: None,
        }
    }
}
