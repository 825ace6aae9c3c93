//! Typed clients over the resource actors.
//!
//! Each wraps a [`ResourceClient`](actor_framework::ResourceClient), maps
//! framework failures into its actor's error type and adds the lookups the
//! services need.

pub mod cart_client;
pub mod product_client;
pub mod user_client;

pub use cart_client::CartClient;
pub use product_client::ProductClient;
pub use user_client::UserClient;
