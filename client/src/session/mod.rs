//! Session guard: who is logged in, resolved once at startup.
//!
//! The session is a small state machine owning the persisted identity:
//!
//! ```text
//! Unresolved ──resolve──▶ Authenticated(user) ◀──login──┐
//!      │                        │                        │
//!      └──────resolve──▶   Anonymous ────────────────────┘
//!                               ▲ logout
//! ```
//!
//! Downstream screens never read storage themselves; they observe
//! [`SessionStatus`] and the routing layer re-evaluates
//! [`navigation::directive`] on every change, so a mid-session logout evicts
//! the user from protected screens.

pub mod actions;
pub mod environment;
pub mod navigation;
pub mod reducer;
pub mod storage;
#[cfg(test)]
mod tests;
pub mod types;

pub use actions::SessionAction;
pub use environment::{ProductionSessionEnvironment, SessionEnvironment};
pub use reducer::SessionReducer;
pub use storage::{FileIdentityStore, IdentityStore, IdentityStoreError, MemoryIdentityStore};
pub use types::{SessionState, SessionStatus};
