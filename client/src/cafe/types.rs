//! State types for the cafe screen.

use crate::api::Product;
use crate::catalog::{Generation, RemoteData};
use crate::types::{Cart, OrderDraft, OrderLine, UserId};

/// Submission phase for the cart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CafePhase {
    /// Cart can be edited and submitted
    #[default]
    Idle,
    /// An order is in flight
    Submitting,
    /// The order went through; the cart has been emptied
    Succeeded,
    /// The last submit was refused; the cart is intact
    Failed(String),
}

impl CafePhase {
    /// Whether cart edits and submission are currently allowed
    #[must_use]
    pub const fn accepts_input(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed(_))
    }
}

/// Full state for the cafe screen.
#[derive(Clone, Debug, PartialEq)]
pub struct CafeState {
    /// The user placing the order
    pub user: UserId,
    /// Product catalog, fetched on mount
    pub products: RemoteData<Vec<Product>>,
    /// Catalog fetch generation
    pub generation: Generation,
    /// The cart
    pub cart: Cart,
    /// Submission phase
    pub phase: CafePhase,
}

impl CafeState {
    /// Fresh cafe screen for a user
    #[must_use]
    pub const fn new(user: UserId) -> Self {
        Self {
            user,
            products: RemoteData::Loading,
            generation: Generation::new(),
            cart: Cart::new(),
            phase: CafePhase::Idle,
        }
    }

    /// Compose the order payload for the current cart.
    #[must_use]
    pub fn draft(&self) -> OrderDraft {
        OrderDraft::Cafe {
            user_id: self.user.clone(),
            total_amount: self.cart.total(),
            products: self
                .cart
                .lines()
                .map(|(product_id, line)| OrderLine {
                    product_id,
                    qty: line.quantity,
                    price: line.unit_price,
                })
                .collect(),
        }
    }
}
