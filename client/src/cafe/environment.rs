//! Environment trait for the cafe reducer.

use crate::api::CinemaBackend;
use std::sync::Arc;

/// Dependencies the cafe reducer needs injected.
pub trait CafeEnvironment: Send + Sync {
    /// The cinema backend
    fn backend(&self) -> Arc<dyn CinemaBackend>;
}

/// Production environment for the cafe screen.
#[derive(Clone)]
pub struct ProductionCafeEnvironment {
    backend: Arc<dyn CinemaBackend>,
}

impl ProductionCafeEnvironment {
    /// Create a new production environment.
    #[must_use]
    pub fn new(backend: Arc<dyn CinemaBackend>) -> Self {
        Self { backend }
    }
}

impl CafeEnvironment for ProductionCafeEnvironment {
    fn backend(&self) -> Arc<dyn CinemaBackend> {
        Arc::clone(&self.backend)
    }
}
