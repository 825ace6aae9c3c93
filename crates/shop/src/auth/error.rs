//! Error type for authentication and registration.

use super::mailer::MailError;
use crate::user_actor::UserError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("User not found")]
    NotFound,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Account is not activated")]
    NotActivated,

    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Invalid activation link")]
    InvalidToken,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Password hashing error: {0}")]
    Hashing(String),

    #[error(transparent)]
    Mail(#[from] MailError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl AuthError {
    /// HTTP status an API layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::NotFound | AuthError::InvalidPassword | AuthError::NotActivated => 401,
            AuthError::DuplicateUsername(_)
            | AuthError::DuplicateEmail(_)
            | AuthError::InvalidToken
            | AuthError::Validation(_) => 400,
            AuthError::Hashing(_) | AuthError::Mail(_) | AuthError::ActorCommunicationError(_) => {
                500
            }
        }
    }
}

impl From<UserError> for AuthError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(_) => AuthError::NotFound,
            UserError::InvalidToken => AuthError::InvalidToken,
            UserError::ValidationError(msg) => AuthError::Validation(msg),
            UserError::ActorCommunicationError(msg) => AuthError::ActorCommunicationError(msg),
        }
    }
}
