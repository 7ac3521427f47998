//! Environment trait for the history reducer.

use crate::api::CinemaBackend;
use std::sync::Arc;

/// Dependencies the history reducer needs injected.
pub trait HistoryEnvironment: Send + Sync {
    /// The cinema backend
    fn backend(&self) -> Arc<dyn CinemaBackend>;
}

/// Production environment for the history screen.
#[derive(Clone)]
pub struct ProductionHistoryEnvironment {
    backend: Arc<dyn CinemaBackend>,
}

impl ProductionHistoryEnvironment {
    /// Create a new production environment.
    #[must_use]
    pub fn new(backend: Arc<dyn CinemaBackend>) -> Self {
        Self { backend }
    }
}

impl HistoryEnvironment for ProductionHistoryEnvironment {
    fn backend(&self) -> Arc<dyn CinemaBackend> {
        Arc::clone(&self.backend)
    }
}
