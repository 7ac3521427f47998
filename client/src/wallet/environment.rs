//! Environment trait for the wallet reducer.

use crate::api::CinemaBackend;
use std::sync::Arc;

/// Dependencies the wallet reducer needs injected.
pub trait WalletEnvironment: Send + Sync {
    /// The cinema backend
    fn backend(&self) -> Arc<dyn CinemaBackend>;
}

/// Production environment for the top-up screen.
#[derive(Clone)]
pub struct ProductionWalletEnvironment {
    backend: Arc<dyn CinemaBackend>,
}

impl ProductionWalletEnvironment {
    /// Create a new production environment.
    #[must_use]
    pub fn new(backend: Arc<dyn CinemaBackend>) -> Self {
        Self { backend }
    }
}

impl WalletEnvironment for ProductionWalletEnvironment {
    fn backend(&self) -> Arc<dyn CinemaBackend> {
        Arc::clone(&self.backend)
    }
}
