//! # Actor Framework
//!
//! Building blocks for resource stores that live behind an actor. Each resource
//! type (users, products, carts) gets one [`ResourceActor`] owning its entities
//! in memory, and any number of cloneable [`ResourceClient`]s that talk to it
//! over a channel.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the resource itself plus the payloads used
//!    to create, update and act on it.
//! 2. **Runtime** ([`ResourceActor`]): the sequential request loop.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed requests and
//!    error mapping for domain clients.
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Basket {
//!     id: u32,
//!     owner: String,
//!     items: u32,
//! }
//!
//! #[derive(Debug)] struct BasketCreate { owner: String }
//! #[derive(Debug)] struct BasketUpdate { items: u32 }
//! #[derive(Debug)] enum BasketAction { Empty }
//! #[derive(Debug, thiserror::Error)] #[error("basket error")] struct BasketError;
//!
//! #[async_trait]
//! impl ActorEntity for Basket {
//!     type Id = u32;
//!     type Create = BasketCreate;
//!     type Update = BasketUpdate;
//!     type Action = BasketAction;
//!     type ActionResult = u32;
//!     type Context = ();
//!     type Error = BasketError;
//!
//!     fn from_create_params(id: u32, params: BasketCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, owner: params.owner, items: 0 })
//!     }
//!
//!     async fn on_update(&mut self, update: BasketUpdate, _: &()) -> Result<(), Self::Error> {
//!         self.items = update.items;
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: BasketAction, _: &()) -> Result<u32, Self::Error> {
//!         match action {
//!             BasketAction::Empty => Ok(std::mem::take(&mut self.items)),
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Basket>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(BasketCreate { owner: "ada".into() }).await.unwrap();
//!     client.update(id, BasketUpdate { items: 3 }).await.unwrap();
//!
//!     let owned = client.find(|b: &Basket| b.owner == "ada").await.unwrap();
//!     assert_eq!(owned[0].items, 3);
//!     assert_eq!(client.perform_action(id, BasketAction::Empty).await.unwrap(), 3);
//! }
//! ```
//!
//! ## Context injection
//!
//! Collaborators are handed to the actor in `run(context)`, not in `new()`.
//! All actors can therefore be created first and wired afterwards, which is how
//! the shop lets the cart side read products without the product actor knowing
//! about carts.
//!
//! ## Concurrency
//!
//! One Tokio task per actor, requests processed one at a time. A single request
//! is atomic; a sequence of requests is not, so read-modify-write across several
//! requests needs coordination above this layer.
//!
//! ## Testing
//!
//! [`mock`] provides a scripted [`mock::MockClient`] and lower-level helpers for
//! answering requests by hand.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Filter, ResourceRequest, Response};
