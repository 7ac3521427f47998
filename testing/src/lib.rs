//! # Bioskop Testing
//!
//! Testing utilities and helpers for the Bioskop client architecture.
//!
//! This crate provides:
//! - Deterministic clock mocks for the shared `Clock` trait
//!
//! ## Example
//!
//! ```ignore
//! use bioskop_testing::test_clock;
//! use bioskop_runtime::Store;
//!
//! #[tokio::test]
//! async fn test_booking_flow() {
//!     let env = test_environment();
//!     let store = Store::new(BookingState::default(), BookingReducer, env);
//!
//!     store.send(BookingAction::ToggleSeat {
//!         seat: SeatLabel::new('A', 1)?,
//!     }).await?;
//!
//!     let selected = store.state(|s| s.selected.clone()).await;
//!     assert_eq!(selected.len(), 1);
//! }
//! ```

use bioskop_core::environment::Clock;
use chrono::{DateTime, Utc};

/// Mock implementations for testing.
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use bioskop_testing::mocks::FixedClock;
    /// use bioskop_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }
}
