//! # Product Actor
//!
//! The catalog. The cart only reads from it (see
//! [`Catalog`](crate::cart_service::Catalog)); creates and updates exist to seed
//! products and to change price or stock while carts hold snapshots.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use shop::cart_service::Catalog;
//! use shop::model::ProductCreate;
//! use shop::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_product(ProductCreate {
//!             name: "Teapot".to_string(),
//!             price: Decimal::from(20),
//!             weight: 0.8,
//!             stock: 5,
//!             images: vec![],
//!         })
//!         .await?;
//!
//!     let product = client.find_product_by_id(&id).await?.unwrap();
//!     assert_eq!(product.stock, 5);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use actor_framework::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
