//! Actions for seat booking.

use crate::catalog::Generation;
use crate::types::SeatLabel;

/// Inputs to the booking reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingAction {
    /// Fetch the booked seats for this showtime. Bumps the fetch generation,
    /// so an earlier fetch still in flight becomes stale.
    Load,

    /// Feedback: booked labels arrived.
    BookedSeatsLoaded {
        /// Generation of the fetch that produced this
        generation: Generation,
        /// Labels the server reports as taken
        seats: Vec<SeatLabel>,
    },

    /// Feedback: the booked-seat fetch failed. The screen still opens, with
    /// an empty booked set; the backend re-validates at submit time.
    BookedSeatsUnavailable {
        /// Generation of the fetch that produced this
        generation: Generation,
        /// User-facing reason, for tracing
        reason: String,
    },

    /// Flip one seat in or out of the selection.
    ToggleSeat(SeatLabel),

    /// Compose the order from the current selection and send it.
    Submit,

    /// Feedback: the backend accepted the order.
    SubmitSucceeded,

    /// Feedback: the backend refused the order.
    SubmitFailed {
        /// Backend reason, e.g. a seat taken in the meantime
        reason: String,
    },
}
