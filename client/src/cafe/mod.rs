//! Cafe: product catalog plus the food-and-beverage cart.
//!
//! The cart maps product to quantity and unit price; totals are pure folds
//! over the lines and a submission composes the same two-field line shape
//! the backend persists. Orders placed here come back in history under the
//! fixed cafe marker title.

pub mod actions;
pub mod environment;
pub mod reducer;
pub mod types;

pub use actions::CafeAction;
pub use environment::{CafeEnvironment, ProductionCafeEnvironment};
pub use reducer::CafeReducer;
pub use types::{CafePhase, CafeState};
