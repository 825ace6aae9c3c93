use crate::auth::{AuthError, AuthService, LogMailer};
use crate::cart_service::{CartError, CartService};
use crate::clients::{CartClient, ProductClient, UserClient};
use crate::config::ShopConfig;
use crate::model::UserId;
use crate::{cart_actor, product_actor, user_actor};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{info, instrument};

/// Errors from operations spanning more than one service.
#[derive(Debug, Error)]
pub enum ShopError {
    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Actor task failed: {0}")]
    Shutdown(String),
}

/// The running shop: three resource actors and the services over them.
pub struct ShopSystem {
    pub user_client: UserClient,
    pub product_client: ProductClient,
    pub cart_client: CartClient,
    pub carts: CartService<CartClient, ProductClient>,
    pub auth: AuthService<LogMailer>,
    handles: Vec<JoinHandle<()>>,
}

impl ShopSystem {
    /// Starts every actor. Must be called inside a Tokio runtime.
    pub fn new(config: &ShopConfig) -> Self {
        let (user_actor, user_client) = user_actor::new(config.actor_buffer_size);
        let (product_actor, product_client) = product_actor::new(config.actor_buffer_size);
        let (cart_actor, cart_client) = cart_actor::new(config.actor_buffer_size);

        let handles = vec![
            tokio::spawn(user_actor.run(())),
            tokio::spawn(product_actor.run(())),
            tokio::spawn(cart_actor.run(())),
        ];

        let carts = CartService::new(cart_client.clone(), product_client.clone());
        let auth = AuthService::new(
            user_client.clone(),
            LogMailer::new(config.mail_sender.clone()),
            config.api_url.clone(),
        );

        info!(api_url = %config.api_url, "Shop system started");
        Self {
            user_client,
            product_client,
            cart_client,
            carts,
            auth,
            handles,
        }
    }

    /// Deletes the user's cart, then the user. The user's cart lock is held
    /// across both steps.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: &UserId) -> Result<(), ShopError> {
        self.carts
            .discard_and_then(user_id, async {
                self.auth.delete_user(user_id).await.map_err(ShopError::from)
            })
            .await?;
        info!("User and cart deleted");
        Ok(())
    }

    /// Stops every actor and waits for them to finish.
    pub async fn shutdown(self) -> Result<(), ShopError> {
        info!("Shutting down shop system");
        let Self {
            user_client,
            product_client,
            cart_client,
            carts,
            auth,
            handles,
        } = self;
        drop((user_client, product_client, cart_client, carts, auth));

        for handle in handles {
            handle
                .await
                .map_err(|e| ShopError::Shutdown(e.to_string()))?;
        }
        info!("Shop system stopped");
        Ok(())
    }
}
