//! End-to-end walkthrough against a scripted backend.
//!
//! Runs the whole client flow offline: resolve the session, authenticate,
//! book seats for a showtime, order from the cafe, top up the wallet, then
//! read back the history. Set `BIOSKOP_DEMO_LIVE=1` to point the same flow
//! at the real backend from `Config::from_env()` instead.

use bioskop_client::api::{ApiError, CinemaBackend, HttpBackend, MockCinemaBackend, TopUpMethod};
use bioskop_client::booking::{
    BookingAction, BookingReducer, BookingState, ProductionBookingEnvironment,
};
use bioskop_client::cafe::{CafeAction, CafeReducer, CafeState, ProductionCafeEnvironment};
use bioskop_client::session::{
    MemoryIdentityStore, ProductionSessionEnvironment, SessionAction, SessionReducer, SessionState,
};
use bioskop_client::types::{ProductId, Rupiah, ScheduleId, SeatLabel, ShowtimeContext, UserId};
use bioskop_client::wallet::{
    ProductionWalletEnvironment, WalletAction, WalletReducer, WalletState,
};
use bioskop_client::Config;
use bioskop_core::environment::SystemClock;
use bioskop_runtime::Store;
use std::sync::Arc;
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(10);

fn scripted_backend() -> Arc<dyn CinemaBackend> {
    let booked: Vec<SeatLabel> = ["A1", "B3"].iter().filter_map(|s| SeatLabel::parse(s)).collect();
    MockCinemaBackend::new()
        .with_user("budi", "rahasia")
        .with_booked_seats(ScheduleId(12), Ok(booked))
        .with_submit_responses(vec![
            Err(ApiError::Rejected {
                message: Some("Kursi habis".to_string()),
            }),
            Ok(()),
        ])
        .shared()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let backend: Arc<dyn CinemaBackend> = if std::env::var("BIOSKOP_DEMO_LIVE").is_ok() {
        tracing::info!(base_url = %config.backend.base_url, "running against the live backend");
        HttpBackend::new(config.backend.base_url.clone(), config.backend.timeout())?.into_shared()
    } else {
        tracing::info!("running against the scripted backend");
        scripted_backend()
    };

    // --- Session: resolve, then authenticate -------------------------------
    let session = Store::new(
        SessionState::new(),
        SessionReducer::new(),
        ProductionSessionEnvironment::new(
            Arc::clone(&backend),
            MemoryIdentityStore::new().shared(),
            Arc::new(SystemClock),
        ),
    );

    session
        .send_and_wait_for(
            SessionAction::Resolve,
            |a| matches!(a, SessionAction::Resolved(_)),
            WAIT,
        )
        .await?;
    tracing::info!(status = ?session.state(|s| s.status.clone()).await, "session resolved");

    session
        .send_and_wait_for(
            SessionAction::Authenticate {
                username: "budi".to_string(),
                password: "rahasia".to_string(),
            },
            |a| {
                matches!(
                    a,
                    SessionAction::LoggedIn { .. } | SessionAction::AuthenticationFailed { .. }
                )
            },
            WAIT,
        )
        .await?;
    let user = session
        .state(|s| s.status.user().cloned())
        .await
        .unwrap_or_else(|| UserId::new("budi"));
    tracing::info!(%user, "authenticated");

    // --- Booking: load, toggle, submit (refused once, then retried) --------
    let context = ShowtimeContext {
        schedule_id: ScheduleId(12),
        unit_price: Rupiah::new(50_000),
        movie_title: "Laskar Pelangi".to_string(),
        branch_name: "Bioskop Tunjungan".to_string(),
        start_time: "2025-12-06 14:00:00".to_string(),
    };
    let booking = Store::new(
        BookingState::new(user.clone(), context),
        BookingReducer::new(),
        ProductionBookingEnvironment::new(Arc::clone(&backend)),
    );

    booking
        .send_and_wait_for(
            BookingAction::Load,
            |a| {
                matches!(
                    a,
                    BookingAction::BookedSeatsLoaded { .. }
                        | BookingAction::BookedSeatsUnavailable { .. }
                )
            },
            WAIT,
        )
        .await?;

    for label in ["A1", "A2", "B1"].iter().filter_map(|s| SeatLabel::parse(s)) {
        booking.send(BookingAction::ToggleSeat(label)).await?;
    }
    tracing::info!(
        selected = ?booking.state(|s| s.selected.clone()).await,
        "seats selected (A1 was booked, so it did not toggle)"
    );

    for attempt in 1..=2 {
        let outcome = booking
            .send_and_wait_for(
                BookingAction::Submit,
                |a| {
                    matches!(
                        a,
                        BookingAction::SubmitSucceeded | BookingAction::SubmitFailed { .. }
                    )
                },
                WAIT,
            )
            .await?;
        tracing::info!(attempt, ?outcome, "booking submit");
    }

    // --- Cafe: fill the cart and order -------------------------------------
    let cafe = Store::new(
        CafeState::new(user.clone()),
        CafeReducer::new(),
        ProductionCafeEnvironment::new(Arc::clone(&backend)),
    );
    cafe.send(CafeAction::AdjustQuantity {
        product_id: ProductId(1),
        unit_price: Rupiah::new(25_000),
        delta: 2,
    })
    .await?;
    let outcome = cafe
        .send_and_wait_for(
            CafeAction::Submit,
            |a| {
                matches!(
                    a,
                    CafeAction::SubmitSucceeded | CafeAction::SubmitFailed { .. }
                )
            },
            WAIT,
        )
        .await?;
    tracing::info!(?outcome, "cafe submit");

    // --- Wallet -------------------------------------------------------------
    let wallet = Store::new(
        WalletState::new(user),
        WalletReducer::new(),
        ProductionWalletEnvironment::new(Arc::clone(&backend)),
    );
    let outcome = wallet
        .send_and_wait_for(
            WalletAction::SubmitTopUp {
                amount: Rupiah::new(50_000),
                method: TopUpMethod::BankTransfer,
            },
            |a| {
                matches!(
                    a,
                    WalletAction::TopUpSucceeded | WalletAction::TopUpFailed { .. }
                )
            },
            WAIT,
        )
        .await?;
    tracing::info!(?outcome, "top-up");

    session.shutdown(WAIT).await?;
    booking.shutdown(WAIT).await?;
    cafe.shutdown(WAIT).await?;
    wallet.shutdown(WAIT).await?;

    Ok(())
}
