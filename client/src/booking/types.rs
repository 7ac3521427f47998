//! State types for seat booking.

use crate::catalog::Generation;
use crate::types::{OrderDraft, SeatLabel, ShowtimeContext, UserId};
use std::collections::BTreeSet;

/// Where the checkout session stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BookingPhase {
    /// Booked seats are being fetched
    #[default]
    Loading,
    /// Seats can be toggled and the order submitted
    Ready,
    /// An order is in flight; input is ignored
    Submitting,
    /// The order went through; the session is over
    Succeeded,
    /// The last submit was refused; toggling and retry are allowed
    Failed(String),
}

impl BookingPhase {
    /// Whether seat toggling and submission are currently allowed
    #[must_use]
    pub const fn accepts_input(&self) -> bool {
        matches!(self, Self::Ready | Self::Failed(_))
    }
}

/// Full state for one seat-booking screen.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingState {
    /// The user placing the order
    pub user: UserId,
    /// Immutable showtime context for this session
    pub context: ShowtimeContext,
    /// Current phase
    pub phase: BookingPhase,
    /// Fetch generation; stale booked-seat responses are discarded
    pub generation: Generation,
    /// Server-authoritative booked labels
    pub booked: BTreeSet<SeatLabel>,
    /// The user's selection, disjoint from `booked`
    pub selected: BTreeSet<SeatLabel>,
}

impl BookingState {
    /// Fresh booking session for a showtime
    #[must_use]
    pub const fn new(user: UserId, context: ShowtimeContext) -> Self {
        Self {
            user,
            context,
            phase: BookingPhase::Loading,
            generation: Generation::new(),
            booked: BTreeSet::new(),
            selected: BTreeSet::new(),
        }
    }

    /// Compose the order payload for the current selection.
    ///
    /// Total is the client-quoted `|selected| × unit_price`; the draft's
    /// lines and total always agree because both come from the same set.
    #[must_use]
    pub fn draft(&self) -> OrderDraft {
        let seats: Vec<SeatLabel> = self.selected.iter().copied().collect();
        #[allow(clippy::cast_possible_truncation)]
        let count = seats.len() as u32;
        OrderDraft::Seats {
            user_id: self.user.clone(),
            schedule_id: self.context.schedule_id,
            total_amount: self.context.unit_price.multiply(count),
            seats,
            ticket_price: self.context.unit_price,
        }
    }
}
