//! # Generic Actor Server
//!
//! `ResourceActor` owns the in-memory store for one entity type and processes
//! requests one at a time on its own Tokio task. Exclusive ownership of the
//! store inside that task is what makes every request atomic with respect to
//! the others; there are no locks around the map.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{Filter, ResourceRequest, Response};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// Usage is always the same three steps:
///
/// 1. `ResourceActor::new(buffer)` returns the actor and a cloneable client.
/// 2. `actor.run(context)` injects the collaborators the entity hooks need.
/// 3. Spawn the returned future; hand the client to whoever needs the store.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Counter { id: u32, hits: u32 }
/// #[derive(Debug)] struct CounterCreate;
/// #[derive(Debug)] struct CounterUpdate;
/// #[derive(Debug)] enum CounterAction { Hit }
/// #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
///
/// #[async_trait]
/// impl ActorEntity for Counter {
///     type Id = u32;
///     type Create = CounterCreate;
///     type Update = CounterUpdate;
///     type Action = CounterAction;
///     type ActionResult = u32;
///     type Context = ();
///     type Error = CounterError;
///
///     fn from_create_params(id: u32, _: CounterCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, hits: 0 })
///     }
///     async fn on_update(&mut self, _: CounterUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: CounterAction, _: &()) -> Result<u32, Self::Error> {
///         self.hits += 1;
///         Ok(self.hits)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Counter>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(CounterCreate).await.unwrap();
///     assert_eq!(client.perform_action(id, CounterAction::Hit).await.unwrap(), 1);
/// }
/// ```
///
/// Ids come from an internal `u32` counter starting at 1 and converted with
/// `T::Id::from`. Update and Action work on a clone of the stored entity and
/// write it back only on success.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` bounds the request channel; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = entity_type::<T>();
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Find { filter, respond_to } => {
                    let found = self.find(&filter);
                    debug!(entity_type, matched = found.len(), "Find");
                    let _ = respond_to.send(Ok(found));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    self.update(id, update, &context, respond_to).await;
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    self.action(id, action, &context, respond_to).await;
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let entity_type = entity_type::<T>();
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::EntityError(Box::new(e))
        })?;
        item.on_create(context).await.map_err(|e| {
            warn!(entity_type, error = %e, "on_create failed");
            FrameworkError::EntityError(Box::new(e))
        })?;

        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }

    fn find(&self, filter: &Filter<T>) -> Vec<T> {
        self.store
            .values()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    }

    async fn update(
        &mut self,
        id: T::Id,
        update: T::Update,
        context: &T::Context,
        respond_to: Response<T>,
    ) {
        let entity_type = entity_type::<T>();
        let Some(current) = self.store.get(&id) else {
            warn!(entity_type, %id, "Not found");
            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
            return;
        };

        let mut draft = current.clone();
        match draft.on_update(update, context).await {
            Ok(()) => {
                self.store.insert(id.clone(), draft.clone());
                info!(entity_type, %id, "Updated");
                let _ = respond_to.send(Ok(draft));
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Update failed");
                let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
            }
        }
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let entity_type = entity_type::<T>();
        let Some(item) = self.store.get(id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        if let Err(e) = item.on_delete(context).await {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }
        self.store.remove(id);
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        Ok(())
    }

    async fn action(
        &mut self,
        id: T::Id,
        action: T::Action,
        context: &T::Context,
        respond_to: Response<T::ActionResult>,
    ) {
        let entity_type = entity_type::<T>();
        let Some(current) = self.store.get(&id) else {
            warn!(entity_type, %id, "Not found");
            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
            return;
        };

        let mut draft = current.clone();
        match draft.handle_action(action, context).await {
            Ok(result) => {
                self.store.insert(id.clone(), draft);
                info!(entity_type, %id, "Action ok");
                let _ = respond_to.send(Ok(result));
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Action failed");
                let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
            }
        }
    }
}

/// Short type name for log fields ("Cart" rather than "shop::model::cart::Cart").
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .rsplit("::")
        .next()
        .unwrap_or("Unknown")
}
