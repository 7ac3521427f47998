//! # Bioskop Client
//!
//! Client core for a cinema ticketing service: session guard, seat
//! booking, cafe cart, wallet top-up, order history, and catalog loaders,
//! all built on the `bioskop-core` reducer/effect architecture and driven
//! by the `bioskop-runtime` store.
//!
//! Each screen is a feature module with its own State/Action/Reducer/
//! Environment; the backend and identity storage are injected behind
//! traits so every reducer is testable against scripted fakes.

pub mod api;
pub mod booking;
pub mod cafe;
pub mod catalog;
pub mod config;
pub mod history;
pub mod session;
pub mod types;
pub mod wallet;

pub use config::Config;
