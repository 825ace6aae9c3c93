//! # Cart Client
//!
//! Wraps a `ResourceClient<Cart>` and implements
//! [`CartStore`](crate::cart_service::CartStore) on top of it.
use crate::cart_actor::CartStoreError;
use crate::cart_service::CartStore;
use crate::model::{Cart, CartCreate, CartUpdate, UserId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartStoreError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<CartStoreError>() {
            Ok(entity_error) => entity_error,
            Err(FrameworkError::NotFound(id)) => CartStoreError::NotFound(id),
            Err(other) => CartStoreError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl CartStore for CartClient {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Cart>, CartStoreError> {
        Ok(self.list_by_user(user_id).await?.into_iter().next())
    }

    #[instrument(skip(self))]
    async fn create(&self, user_id: &UserId) -> Result<Cart, CartStoreError> {
        debug!("Sending request");
        let id = self
            .inner
            .create(CartCreate {
                user_id: user_id.clone(),
            })
            .await
            .map_err(Self::map_error)?;

        info!(cart_id = %id, "Cart created");
        self.get(id.clone())
            .await?
            .ok_or_else(|| CartStoreError::NotFound(id.to_string()))
    }

    #[instrument(skip(self, cart), fields(cart_id = %cart.id))]
    async fn save(&self, cart: &Cart) -> Result<Cart, CartStoreError> {
        debug!(lines = cart.line_items.len(), total = %cart.total_price, "Sending request");
        self.inner
            .update(
                cart.id.clone(),
                CartUpdate {
                    line_items: cart.line_items.clone(),
                    total_price: cart.total_price,
                },
            )
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Cart>, CartStoreError> {
        let owner = user_id.clone();
        let mut carts = self.find(move |cart: &Cart| cart.user_id == owner).await?;
        carts.sort_by_key(|cart| cart.id.0);
        Ok(carts)
    }

    #[instrument(skip(self))]
    async fn delete_by_user(&self, user_id: &UserId) -> Result<usize, CartStoreError> {
        let carts = self.list_by_user(user_id).await?;
        for cart in &carts {
            self.delete(cart.id.clone()).await?;
        }
        info!(removed = carts.len(), "Carts deleted");
        Ok(carts.len())
    }
}
