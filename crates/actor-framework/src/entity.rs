//! # ActorEntity Trait
//!
//! The contract every resource (User, Product, Cart, …) implements to be
//! managed by the generic [`ResourceActor`](crate::ResourceActor).
//!
//! Associated types pin each resource to its own payloads: a cart actor only
//! accepts `CartCreate`/`CartUpdate`, a product actor only `ProductCreate`/
//! `ProductUpdate`. Mixing them up is a compile error rather than a runtime one.
//!
//! `on_create` and `on_delete` have no-op defaults; `on_update` and
//! `handle_action` must be provided.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// Hooks are async and receive the actor's `Context`, which is injected when the
/// actor is started (`actor.run(context)`) rather than when it is constructed.
/// A cart store that needs no collaborators uses `()`.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload used to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload used to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    type Context: Send + Sync;

    /// One error type per actor, covering every hook and action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from its generated id and the create payload.
    /// Called before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the entity is stored. An error here
    /// aborts the create and nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update payload.
    ///
    /// The actor works on a copy and only stores it when this returns `Ok`, so a
    /// failed update leaves the previous state in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the entity is removed. An error keeps it in the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action. Same copy-then-commit rule as
    /// `on_update`.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
