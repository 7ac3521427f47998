//! Reducer for seat booking.

use crate::booking::environment::BookingEnvironment;
use crate::booking::{BookingAction, BookingPhase, BookingState};
use crate::types::SeatPlan;
use bioskop_core::{async_effect, effect::Effect, reducer::Reducer};
use smallvec::{smallvec, SmallVec};

/// Seat booking reducer.
///
/// One submission in flight at a time: `Submit` while `Submitting` is a
/// no-op, as is `Submit` with an empty selection. Booked seats never enter
/// the selection, so `selected ∩ booked = ∅` holds across any action
/// sequence.
#[derive(Clone, Copy, Debug)]
pub struct BookingReducer;

impl BookingReducer {
    /// Create a new booking reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for BookingReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for BookingReducer {
    type State = BookingState;
    type Action = BookingAction;
    type Environment = crate::booking::environment::ProductionBookingEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            BookingAction::Load => {
                state.generation = state.generation.next();
                state.phase = BookingPhase::Loading;

                let generation = state.generation;
                let schedule_id = state.context.schedule_id;
                let backend = env.backend();
                smallvec![async_effect! {
                    match backend.booked_seats(schedule_id).await {
                        Ok(seats) => Some(BookingAction::BookedSeatsLoaded { generation, seats }),
                        Err(err) => Some(BookingAction::BookedSeatsUnavailable {
                            generation,
                            reason: err.to_notice(),
                        }),
                    }
                }]
            }

            BookingAction::BookedSeatsLoaded { generation, seats } => {
                if generation != state.generation {
                    // Response from a superseded fetch.
                    return smallvec![Effect::None];
                }
                state.booked = seats
                    .into_iter()
                    .filter(|label| SeatPlan::contains(*label))
                    .collect();
                // Keep the invariant if a selected seat got booked between loads.
                let booked = state.booked.clone();
                state.selected.retain(|label| !booked.contains(label));
                state.phase = BookingPhase::Ready;
                smallvec![Effect::None]
            }

            BookingAction::BookedSeatsUnavailable { generation, reason } => {
                if generation != state.generation {
                    return smallvec![Effect::None];
                }
                // Permissive default: open the screen with nothing marked
                // booked and let the backend re-validate at submit time.
                tracing::warn!(%reason, "booked seats unavailable, showing empty plan");
                state.booked.clear();
                state.phase = BookingPhase::Ready;
                smallvec![Effect::None]
            }

            BookingAction::ToggleSeat(label) => {
                if !state.phase.accepts_input()
                    || !SeatPlan::contains(label)
                    || state.booked.contains(&label)
                {
                    return smallvec![Effect::None];
                }
                if !state.selected.remove(&label) {
                    state.selected.insert(label);
                }
                smallvec![Effect::None]
            }

            BookingAction::Submit => {
                if !state.phase.accepts_input() || state.selected.is_empty() {
                    return smallvec![Effect::None];
                }
                state.phase = BookingPhase::Submitting;

                let draft = state.draft();
                let backend = env.backend();
                smallvec![async_effect! {
                    match backend.submit_order(draft).await {
                        Ok(()) => Some(BookingAction::SubmitSucceeded),
                        Err(err) => Some(BookingAction::SubmitFailed {
                            reason: err.to_notice(),
                        }),
                    }
                }]
            }

            BookingAction::SubmitSucceeded => {
                if state.phase != BookingPhase::Submitting {
                    return smallvec![Effect::None];
                }
                tracing::info!(schedule = %state.context.schedule_id, "booking succeeded");
                state.phase = BookingPhase::Succeeded;
                state.selected.clear();
                smallvec![Effect::None]
            }

            BookingAction::SubmitFailed { reason } => {
                if state.phase != BookingPhase::Submitting {
                    return smallvec![Effect::None];
                }
                tracing::warn!(%reason, "booking refused");
                // Selection stays intact for retry.
                state.phase = BookingPhase::Failed(reason);
                smallvec![Effect::None]
            }
        }
    }
}
