//! Wallet top-up.
//!
//! Below-minimum amounts are rejected locally, before any network call; the
//! backend only ever sees requests of at least [`types::MIN_TOP_UP`].

pub mod actions;
pub mod environment;
pub mod reducer;
#[cfg(test)]
mod tests;
pub mod types;

pub use actions::WalletAction;
pub use environment::{ProductionWalletEnvironment, WalletEnvironment};
pub use reducer::WalletReducer;
pub use types::{WalletPhase, WalletState, MIN_TOP_UP, QUICK_AMOUNTS};
