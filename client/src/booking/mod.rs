//! Seat selection and checkout for one showtime.
//!
//! The screen owns three seat sets over the fixed auditorium plan: the
//! server-authoritative booked set (immutable for the life of the checkout
//! session), the user's ordered selection, and everything else available.
//! `selected` and `booked` are disjoint by construction; toggles on booked
//! seats are rejected in the reducer, not in the UI.
//!
//! Phases: `Loading → Ready → Submitting → Succeeded | Failed`. `Failed`
//! behaves as `Ready` so the user can adjust seats and retry with the
//! selection intact.

pub mod actions;
pub mod environment;
pub mod reducer;
pub mod types;

pub use actions::BookingAction;
pub use environment::{BookingEnvironment, ProductionBookingEnvironment};
pub use reducer::BookingReducer;
pub use types::{BookingPhase, BookingState};
