//! # Product Client
//!
//! Wraps a `ResourceClient<Product>`. Implements
//! [`Catalog`](crate::cart_service::Catalog) for the cart service.
use crate::cart_service::Catalog;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<ProductError>() {
            Ok(entity_error) => entity_error,
            Err(FrameworkError::NotFound(id)) => ProductError::NotFound(id),
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Changes price and/or stock. Carts already holding the product keep
    /// their snapshot.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl Catalog for ProductClient {
    async fn find_product_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        self.get(id.clone()).await
    }
}
