//! Actions for wallet top-up.

use crate::api::TopUpMethod;
use crate::types::Rupiah;

/// Inputs to the wallet reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletAction {
    /// Submit a top-up. Amounts below the minimum are rejected locally
    /// with a notice and no network call.
    SubmitTopUp {
        /// Amount to add to the wallet
        amount: Rupiah,
        /// Payment method
        method: TopUpMethod,
    },

    /// Feedback: the backend accepted the top-up.
    TopUpSucceeded,

    /// Feedback: the backend refused the top-up.
    TopUpFailed {
        /// Backend reason
        reason: String,
    },

    /// Dismiss the local validation notice.
    DismissNotice,
}
