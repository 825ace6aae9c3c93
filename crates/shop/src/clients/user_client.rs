//! # User Client
//!
//! Wraps a `ResourceClient<User>` with account lookups and activation.
use crate::model::{User, UserCreate, UserId};
use crate::user_actor::{UserAction, UserError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    /// Entity errors raised by the actor come back as themselves; anything else
    /// is a communication failure.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<UserError>() {
            Ok(entity_error) => entity_error,
            Err(FrameworkError::NotFound(id)) => UserError::NotFound(id),
            Err(other) => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl UserClient {
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        let username = username.to_string();
        let found = self.find(move |user: &User| user.username == username).await?;
        Ok(found.into_iter().next())
    }

    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let email = email.to_string();
        let found = self.find(move |user: &User| user.email == email).await?;
        Ok(found.into_iter().next())
    }

    #[instrument(skip_all)]
    pub async fn find_by_activation_token(&self, token: &str) -> Result<Option<User>, UserError> {
        let token = token.to_string();
        let found = self
            .find(move |user: &User| user.activation_token.as_deref() == Some(token.as_str()))
            .await?;
        Ok(found.into_iter().next())
    }

    /// Activates `id` if `token` is still its pending token.
    #[instrument(skip(self, token))]
    pub async fn activate(&self, id: UserId, token: String) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, UserAction::Activate { token })
            .await
            .map_err(Self::map_error)
    }
}
