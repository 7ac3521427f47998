//! Environment trait for the booking reducer.

use crate::api::CinemaBackend;
use std::sync::Arc;

/// Dependencies the booking reducer needs injected.
pub trait BookingEnvironment: Send + Sync {
    /// The cinema backend
    fn backend(&self) -> Arc<dyn CinemaBackend>;
}

/// Production environment for seat booking.
#[derive(Clone)]
pub struct ProductionBookingEnvironment {
    backend: Arc<dyn CinemaBackend>,
}

impl ProductionBookingEnvironment {
    /// Create a new production environment.
    #[must_use]
    pub fn new(backend: Arc<dyn CinemaBackend>) -> Self {
        Self { backend }
    }
}

impl BookingEnvironment for ProductionBookingEnvironment {
    fn backend(&self) -> Arc<dyn CinemaBackend> {
        Arc::clone(&self.backend)
    }
}
