//! Error types for the Cart actor.

use thiserror::Error;

/// Errors raised by the cart store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartStoreError {
    /// The cart record does not exist (anymore).
    #[error("Cart not found: {0}")]
    NotFound(String),

    /// The saved contents break a line invariant.
    #[error("Invalid cart line: {0}")]
    InvalidLine(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
