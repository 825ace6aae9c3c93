//! # System Lifecycle
//!
//! Creates the resource actors, wires their clients into the services, and
//! shuts everything down again.
//!
//! ```rust,ignore
//! let system = ShopSystem::new(&ShopConfig::from_env()?);
//! let cart = system.carts.get_or_create(&user_id).await?;
//! system.shutdown().await?;
//! ```
//!
//! ## Wiring
//!
//! None of the actors need context: the cart actor stores what it is given and
//! the cross-actor reads (catalog lookups, user checks) happen in the services,
//! which hold client clones. Every actor is therefore started with `run(())`.
//!
//! ## Shutdown
//!
//! An actor stops once every clone of its client is gone. `shutdown` drops the
//! services and clients, then awaits each actor task.
//!
//! ## Ownership
//!
//! A user owns their cart. [`ShopSystem::delete_user`] removes the cart before
//! the account so that a failure never leaves a cart without an owner.

pub mod shop_system;

pub use shop_system::*;
