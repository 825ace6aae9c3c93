//! Error types for the User actor.

use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// The activation token does not belong to this user, or was already used.
    #[error("Invalid activation token")]
    InvalidToken,

    /// The user data provided is invalid.
    #[error("User validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
