//! Full checkout flow: resolve a persisted session, book seats, read back
//! history, all against the scripted backend and a real identity file.

#![allow(clippy::unwrap_used)]

use bioskop_client::api::{ApiError, CinemaBackend, MockCinemaBackend, OrderSummary};
use bioskop_client::booking::{
    BookingAction, BookingPhase, BookingReducer, BookingState, ProductionBookingEnvironment,
};
use bioskop_client::history::{
    HistoryAction, HistoryReducer, HistoryState, HistoryTab, ProductionHistoryEnvironment,
    CAFE_ORDER_TITLE,
};
use bioskop_client::session::{
    FileIdentityStore, ProductionSessionEnvironment, SessionAction, SessionReducer, SessionState,
    SessionStatus,
};
use bioskop_client::types::{
    OrderDraft, OrderId, Rupiah, ScheduleId, SeatLabel, ShowtimeContext, UserId,
};
use bioskop_runtime::Store;
use bioskop_testing::test_clock;
use std::sync::Arc;
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(2);

fn seat(s: &str) -> SeatLabel {
    SeatLabel::parse(s).unwrap()
}

fn showtime() -> ShowtimeContext {
    ShowtimeContext {
        schedule_id: ScheduleId(12),
        unit_price: Rupiah::new(50_000),
        movie_title: "Laskar Pelangi".to_string(),
        branch_name: "Bioskop Tunjungan".to_string(),
        start_time: "2025-12-06 14:00:00".to_string(),
    }
}

#[tokio::test]
async fn persisted_user_books_two_seats() {
    let dir = tempfile::tempdir().unwrap();
    let identity_path = dir.path().join("identity.json");

    // A previous run left "budi" logged in.
    let seed = FileIdentityStore::new(identity_path.clone());
    let session_env = ProductionSessionEnvironment::new(
        MockCinemaBackend::new().shared(),
        seed.into_shared(),
        Arc::new(test_clock()),
    );
    let session = Store::new(SessionState::new(), SessionReducer::new(), session_env);
    session
        .send_and_wait_for(
            SessionAction::Login {
                identity: UserId::new("budi"),
            },
            |a| matches!(a, SessionAction::LoggedIn { .. }),
            WAIT,
        )
        .await
        .unwrap();
    session.shutdown(WAIT).await.unwrap();

    // Fresh process: resolve from the same file.
    let session_env = ProductionSessionEnvironment::new(
        MockCinemaBackend::new().shared(),
        FileIdentityStore::new(identity_path).into_shared(),
        Arc::new(test_clock()),
    );
    let session = Store::new(SessionState::new(), SessionReducer::new(), session_env);
    session
        .send_and_wait_for(
            SessionAction::Resolve,
            |a| matches!(a, SessionAction::Resolved(_)),
            WAIT,
        )
        .await
        .unwrap();
    let user = match session.state(|s| s.status.clone()).await {
        SessionStatus::Authenticated(user) => user,
        status => panic!("expected authenticated session, got {status:?}"),
    };
    assert_eq!(user.as_str(), "budi");

    // Book two free seats around the taken ones.
    let backend = Arc::new(
        MockCinemaBackend::new()
            .with_booked_seats(ScheduleId(12), Ok(vec![seat("A1"), seat("B3")])),
    );
    let booking = Store::new(
        BookingState::new(user, showtime()),
        BookingReducer::new(),
        ProductionBookingEnvironment::new(Arc::clone(&backend) as Arc<dyn CinemaBackend>),
    );

    booking
        .send_and_wait_for(
            BookingAction::Load,
            |a| matches!(a, BookingAction::BookedSeatsLoaded { .. }),
            WAIT,
        )
        .await
        .unwrap();

    for label in ["A1", "A2", "B1"] {
        booking.send(BookingAction::ToggleSeat(seat(label))).await.unwrap();
    }

    booking
        .send_and_wait_for(
            BookingAction::Submit,
            |a| matches!(a, BookingAction::SubmitSucceeded),
            WAIT,
        )
        .await
        .unwrap();

    assert_eq!(
        booking.state(|s| s.phase.clone()).await,
        BookingPhase::Succeeded
    );

    let submitted = backend.submitted_orders();
    assert_eq!(submitted.len(), 1);
    match &submitted[0] {
        OrderDraft::Seats {
            user_id,
            schedule_id,
            total_amount,
            seats,
            ticket_price,
        } => {
            assert_eq!(user_id.as_str(), "budi");
            assert_eq!(*schedule_id, ScheduleId(12));
            assert_eq!(*seats, vec![seat("A2"), seat("B1")]);
            assert_eq!(*ticket_price, Rupiah::new(50_000));
            assert_eq!(*total_amount, Rupiah::new(100_000));
        }
        OrderDraft::Cafe { .. } => panic!("seat checkout composed a cafe draft"),
    }

    booking.shutdown(WAIT).await.unwrap();
    session.shutdown(WAIT).await.unwrap();
}

#[tokio::test]
async fn refused_booking_surfaces_backend_reason() {
    let backend = Arc::new(MockCinemaBackend::new().with_submit_responses(vec![Err(
        ApiError::Rejected {
            message: Some("Kursi habis".to_string()),
        },
    )]));

    let mut initial = BookingState::new(UserId::new("budi"), showtime());
    initial.phase = BookingPhase::Ready;
    initial.selected = [seat("C1")].into_iter().collect();

    let booking = Store::new(
        initial,
        BookingReducer::new(),
        ProductionBookingEnvironment::new(backend),
    );
    booking
        .send_and_wait_for(
            BookingAction::Submit,
            |a| matches!(a, BookingAction::SubmitFailed { .. }),
            WAIT,
        )
        .await
        .unwrap();

    let (phase, selected) = booking
        .state(|s| (s.phase.clone(), s.selected.clone()))
        .await;
    assert_eq!(phase, BookingPhase::Failed("Kursi habis".to_string()));
    assert!(selected.contains(&seat("C1")));
}

#[tokio::test]
async fn history_after_orders_shows_both_tabs() {
    let ticket = OrderSummary {
        order_id: OrderId(1),
        order_date: "2025-12-06 10:00:00".to_string(),
        total_amount: Rupiah::new(100_000),
        status: "PAID".to_string(),
        movie_title: "Laskar Pelangi".to_string(),
        branch_name: "Bioskop Tunjungan".to_string(),
        start_time: "2025-12-06 14:00:00".to_string(),
    };
    let cafe = OrderSummary {
        order_id: OrderId(2),
        movie_title: CAFE_ORDER_TITLE.to_string(),
        ..ticket.clone()
    };
    let backend = Arc::new(MockCinemaBackend::new().with_order_history("budi", vec![ticket, cafe]));

    let history = Store::new(
        HistoryState::new(UserId::new("budi")),
        HistoryReducer::new(),
        ProductionHistoryEnvironment::new(backend),
    );

    let mut handle = history.send(HistoryAction::Load).await.unwrap();
    handle.wait().await;

    history.send(HistoryAction::SelectTab(HistoryTab::Cafe)).await.unwrap();
    let cafe_rows = history.state(|s| s.visible_orders().len()).await;
    assert_eq!(cafe_rows, 1);

    history.send(HistoryAction::SelectTab(HistoryTab::Tickets)).await.unwrap();
    let ticket_rows = history.state(|s| s.visible_orders().len()).await;
    assert_eq!(ticket_rows, 1);
}
