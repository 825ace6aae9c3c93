//! # Framework Errors
//!
//! Failures raised by the actor plumbing itself. Entity-level failures travel
//! inside [`FrameworkError::EntityError`] so the caller can downcast them back
//! to the entity's own error type.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity error carried by [`FrameworkError::EntityError`].
    ///
    /// Returns the original `FrameworkError` when it does not carry an `E`.
    pub fn into_entity_error<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(source) => match source.downcast::<E>() {
                Ok(err) => Ok(*err),
                Err(source) => Err(FrameworkError::EntityError(source)),
            },
            other => Err(other),
        }
    }
}
