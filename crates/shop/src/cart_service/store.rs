//! The collaborators [`CartService`](super::CartService) is generic over.
//!
//! The shop wires the actor-backed clients in; tests can substitute anything
//! that implements these traits.

use crate::cart_actor::CartStoreError;
use crate::model::{Cart, Product, ProductId, UserId};
use crate::product_actor::ProductError;
use async_trait::async_trait;

/// Read-only product lookup.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn find_product_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError>;
}

/// Persistence for cart records, at most one per user.
#[async_trait]
pub trait CartStore: Send + Sync {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Cart>, CartStoreError>;

    /// Persists a new, empty cart for `user_id` and returns it.
    async fn create(&self, user_id: &UserId) -> Result<Cart, CartStoreError>;

    /// Writes `cart`'s lines and total, returning the stored record.
    async fn save(&self, cart: &Cart) -> Result<Cart, CartStoreError>;

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Cart>, CartStoreError>;

    /// Removes every cart of `user_id`, returning how many were removed.
    async fn delete_by_user(&self, user_id: &UserId) -> Result<usize, CartStoreError>;
}
