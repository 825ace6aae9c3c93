//! # Cart Actor
//!
//! Persists cart records. The actor knows nothing about stock or prices; it
//! stores what [`CartService`](crate::cart_service::CartService) saves and
//! refuses contents that could never be valid (a line with zero units, or two
//! lines for one product).
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Cart`]
//! - [`error`] - [`CartStoreError`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CartClient;
use crate::model::Cart;
use actor_framework::ResourceActor;

/// Creates a new Cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Cart>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CartClient::new(generic_client))
}
