//! Environment trait for the session reducer.

use crate::api::CinemaBackend;
use crate::session::storage::IdentityStore;
use bioskop_core::environment::Clock;
use std::sync::Arc;

/// Dependencies the session reducer needs injected.
pub trait SessionEnvironment: Send + Sync {
    /// The cinema backend, for login/registration
    fn backend(&self) -> Arc<dyn CinemaBackend>;

    /// Identity persistence
    fn identity_store(&self) -> Arc<dyn IdentityStore>;

    /// Clock for resolution timestamps
    fn clock(&self) -> &dyn Clock;
}

/// Production environment for the session guard.
#[derive(Clone)]
pub struct ProductionSessionEnvironment {
    backend: Arc<dyn CinemaBackend>,
    identity_store: Arc<dyn IdentityStore>,
    clock: Arc<dyn Clock>,
}

impl ProductionSessionEnvironment {
    /// Create a new production environment.
    #[must_use]
    pub fn new(
        backend: Arc<dyn CinemaBackend>,
        identity_store: Arc<dyn IdentityStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            backend,
            identity_store,
            clock,
        }
    }
}

impl SessionEnvironment for ProductionSessionEnvironment {
    fn backend(&self) -> Arc<dyn CinemaBackend> {
        Arc::clone(&self.backend)
    }

    fn identity_store(&self) -> Arc<dyn IdentityStore> {
        Arc::clone(&self.identity_store)
    }

    fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
