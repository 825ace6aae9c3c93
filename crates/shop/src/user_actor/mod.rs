//! # User Actor
//!
//! Stores registered accounts. Lookups by username, email or activation token
//! go through the framework's `find`; activation is an action so that the
//! token check and the state change happen in one step inside the actor.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`User`]
//! - [`actions`] - [`UserAction`]
//! - [`error`] - [`UserError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use shop::user_actor;
//! use shop::model::UserCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_user(UserCreate {
//!             username: "ada".to_string(),
//!             email: "ada@example.com".to_string(),
//!             password_hash: "$argon2id$placeholder".to_string(),
//!             activation_token: "abc123".to_string(),
//!         })
//!         .await?;
//!
//!     let user = client.activate(id, "abc123".to_string()).await?;
//!     assert!(user.is_activated);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use actor_framework::ResourceActor;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}
