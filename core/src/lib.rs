//! # Bioskop Core
//!
//! Core traits and types for the Bioskop client architecture.
//!
//! Every screen of the client is modeled as a feature with unidirectional
//! data flow:
//!
//! - **State**: owned domain state for the feature
//! - **Action**: all possible inputs (user intents and effect feedback)
//! - **Reducer**: pure function `(State, Action, Environment) → Effects`
//! - **Effect**: side-effect *descriptions* (not execution)
//! - **Environment**: injected dependencies behind traits
//!
//! The runtime crate provides the `Store` that drives the
//! action → reducer → effects → action feedback loop.
//!
//! ## Example
//!
//! ```ignore
//! use bioskop_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! impl Reducer for WalletReducer {
//!     type State = WalletState;
//!     type Action = WalletAction;
//!     type Environment = WalletEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut WalletState,
//!         action: WalletAction,
//!         env: &WalletEnvironment,
//!     ) -> SmallVec<[Effect<WalletAction>; 4]> {
//!         smallvec![Effect::None]
//!     }
//! }
//! ```

// Re-export commonly used types so feature crates import from one place.
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{smallvec, SmallVec};

pub mod effect_macros;

/// Reducer module - the core trait for feature logic.
///
/// Reducers are pure functions: `(State, Action, Environment) → Effects`.
/// They contain all business logic and are deterministic and testable
/// without a UI harness or a network.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for feature logic.
    ///
    /// # Type Parameters
    ///
    /// - `State`: the domain state this reducer operates on
    /// - `Action`: the action type this reducer processes
    /// - `Environment`: the injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects.
        ///
        /// This is a pure function that:
        /// 1. Validates the action against the current state
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed by the runtime
        ///
        /// Most actions produce zero or one effect, so the return type is a
        /// `SmallVec` that stays on the stack for the common case.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - side-effect descriptions.
///
/// Effects are values describing what should happen, returned from reducers
/// and executed by the Store runtime. They are composable and, because the
/// feedback action is checked against current state on re-entry, implicitly
/// cancellable: a late effect whose feedback no longer matches is ignored
/// by the reducer rather than applied.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    /// Effect type - describes a side effect to be executed.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: the action type that effects can produce (feedback loop)
    #[allow(missing_docs)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Run effects sequentially
        Sequential(Vec<Effect<Action>>),

        /// Delayed action (for timeouts)
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after delay
            action: Box<Action>,
        },

        /// Arbitrary async computation.
        ///
        /// Returns `Option<Action>` - if `Some`, the action is fed back into
        /// the reducer.
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// True for `Effect::None`, false for anything that would execute.
        ///
        /// Useful in tests asserting that a guard rejected an action without
        /// producing work.
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }
    }
}

/// Environment module - dependency injection traits shared across features.
///
/// All external dependencies are abstracted behind traits and injected via
/// each feature's Environment type. Feature-specific dependencies (the HTTP
/// backend, identity storage) live with the features; only truly shared
/// concerns live here.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability.
    ///
    /// Production uses the system clock; tests use a fixed clock so
    /// timestamps are deterministic.
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// System clock backed by [`Utc::now`].
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::effect::Effect;

    #[derive(Debug, Clone)]
    enum TestAction {
        Done,
    }

    #[test]
    fn none_effect_is_none() {
        let effect: Effect<TestAction> = Effect::None;
        assert!(effect.is_none());
    }

    #[test]
    fn future_effect_is_not_none() {
        let effect: Effect<TestAction> =
            Effect::Future(Box::pin(async { Some(TestAction::Done) }));
        assert!(!effect.is_none());
    }

    #[test]
    fn merge_builds_parallel() {
        let effect: Effect<TestAction> = Effect::merge(vec![Effect::None, Effect::None]);
        assert!(matches!(effect, Effect::Parallel(ref effects) if effects.len() == 2));
    }
}
