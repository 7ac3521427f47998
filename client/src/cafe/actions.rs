//! Actions for the cafe screen.

use crate::api::Product;
use crate::catalog::Generation;
use crate::types::{ProductId, Rupiah};

/// Inputs to the cafe reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum CafeAction {
    /// Fetch the product catalog.
    Load,

    /// Feedback: the catalog arrived.
    ProductsLoaded {
        /// Generation of the fetch that produced this
        generation: Generation,
        /// Catalog contents
        products: Vec<Product>,
    },

    /// Feedback: the catalog fetch failed. The screen still opens; the cart
    /// works against whatever the user already knows.
    ProductsUnavailable {
        /// Generation of the fetch that produced this
        generation: Generation,
        /// User-facing reason
        reason: String,
    },

    /// Add `delta` units of a product to the cart (negative to remove).
    /// A line driven to zero or below is deleted.
    AdjustQuantity {
        /// Product being adjusted
        product_id: ProductId,
        /// Unit price recorded on the line
        unit_price: Rupiah,
        /// Signed quantity change
        delta: i32,
    },

    /// Compose the order from the cart and send it.
    Submit,

    /// Feedback: the backend accepted the order.
    SubmitSucceeded,

    /// Feedback: the backend refused the order.
    SubmitFailed {
        /// Backend reason
        reason: String,
    },
}
