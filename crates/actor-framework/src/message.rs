//! # Generic Messages
//!
//! The request envelope exchanged between a `ResourceClient` and its
//! `ResourceActor`. Every variant carries a oneshot sender the actor answers on.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use std::fmt;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A predicate evaluated inside the actor against every stored entity.
///
/// Lets callers look entities up by something other than their id
/// (a cart by its owner, a user by username) without the actor knowing the
/// query shapes in advance.
pub struct Filter<T>(Box<dyn Fn(&T) -> bool + Send + Sync>);

impl<T> Filter<T> {
    pub fn new(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self(Box::new(predicate))
    }

    pub fn matches(&self, item: &T) -> bool {
        (self.0)(item)
    }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Filter(..)")
    }
}

/// Requests understood by a [`ResourceActor`](crate::ResourceActor).
///
/// The variants are the resource lifecycle (create, read, update, delete), a
/// predicate query, and a custom [`ActorEntity::Action`] for anything that must
/// read and write one entity atomically.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Find {
        filter: Filter<T>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
