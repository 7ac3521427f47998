//! Order history and wallet statement.
//!
//! Order and balance history load in parallel on mount. Tab switching is a
//! pure filter over the already-loaded rows; cafe orders are told apart
//! from tickets by the fixed marker title the backend records them under.

pub mod actions;
pub mod environment;
pub mod reducer;
#[cfg(test)]
mod tests;
pub mod types;

pub use actions::HistoryAction;
pub use environment::{HistoryEnvironment, ProductionHistoryEnvironment};
pub use reducer::HistoryReducer;
pub use types::{HistoryState, HistoryTab, CAFE_ORDER_TITLE};
