//! Error type for cart operations.

use crate::cart_actor::CartStoreError;
use crate::model::{ProductId, UserId};
use crate::product_actor::ProductError;
use thiserror::Error;

/// Why a cart operation failed.
///
/// A product that is already in the cart is not an error; see
/// [`AddItemOutcome`](super::AddItemOutcome).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Product not found: {0}")]
    ItemNotFound(ProductId),

    #[error("No cart for {0}")]
    CartNotFound(UserId),

    #[error("{product_id} is not in the cart of {user_id}")]
    LineNotFound {
        user_id: UserId,
        product_id: ProductId,
    },

    #[error("{0} is out of stock")]
    OutOfStock(ProductId),

    #[error("Cart total of {0} is out of range")]
    TotalOverflow(UserId),

    /// The cart store or the catalog could not be reached, or refused a write.
    #[error("Store error: {0}")]
    StoreError(String),
}

impl CartError {
    /// HTTP status an API layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            CartError::ItemNotFound(_)
            | CartError::OutOfStock(_)
            | CartError::TotalOverflow(_) => 400,
            CartError::CartNotFound(_) | CartError::LineNotFound { .. } => 404,
            CartError::StoreError(_) => 500,
        }
    }
}

impl From<CartStoreError> for CartError {
    fn from(e: CartStoreError) -> Self {
        CartError::StoreError(e.to_string())
    }
}

impl From<ProductError> for CartError {
    fn from(e: ProductError) -> Self {
        CartError::StoreError(e.to_string())
    }
}
