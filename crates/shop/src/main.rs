//! # Shop demo
//!
//! Walks one customer through the whole system:
//!
//! 1. Register, fail to log in before activation, activate, log in.
//! 2. Seed a small catalog.
//! 3. Fill, adjust and trim the cart, printing it as JSON.
//! 4. Delete the customer, which also removes the cart.
//!
//! `RUST_LOG=debug cargo run -p shop` shows every actor request.

use actor_framework::tracing::setup_tracing;
use rust_decimal::Decimal;
use shop::auth::NewUser;
use shop::cart_service::AddItemOutcome;
use shop::config::ShopConfig;
use shop::lifecycle::ShopSystem;
use shop::model::{ProductCreate, ProductImage};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = ShopConfig::from_env()?;
    let system = ShopSystem::new(&config);

    // --- Account ---
    let user_id = async {
        let registered = system
            .auth
            .register(NewUser {
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                password: "correct horse".to_string(),
            })
            .await?;
        info!(message = %registered.message, "Registered");

        if let Err(e) = system
            .auth
            .validate_credentials("alice", "correct horse")
            .await
        {
            warn!(error = %e, status = e.status_code(), "Login before activation");
        }

        let link = system
            .auth
            .mailer()
            .sent()
            .pop()
            .map(|mail| mail.activation_url)
            .unwrap_or_default();
        let token = link.rsplit('/').next().unwrap_or_default();
        let activated = system.auth.activate(token).await?;
        info!(redirect_to = %activated.redirect_to, "Activated");

        let user = system
            .auth
            .validate_credentials("alice", "correct horse")
            .await?;
        Ok::<_, Box<dyn std::error::Error>>(user.id)
    }
    .instrument(tracing::info_span!("account"))
    .await?;

    // --- Catalog ---
    let teapot = system
        .product_client
        .create_product(ProductCreate {
            name: "Cast iron teapot".to_string(),
            price: Decimal::new(2000, 2),
            weight: 1.4,
            stock: 5,
            images: vec![ProductImage {
                url: "https://cdn.example.com/teapot.jpg".to_string(),
            }],
        })
        .await?;
    let mug = system
        .product_client
        .create_product(ProductCreate {
            name: "Stoneware mug".to_string(),
            price: Decimal::new(750, 2),
            weight: 0.35,
            stock: 2,
            images: vec![],
        })
        .await?;

    // --- Cart ---
    async {
        for product_id in [&teapot, &mug, &teapot] {
            match system.carts.add_item(&user_id, product_id).await? {
                AddItemOutcome::Added(cart) => {
                    info!(%product_id, total = %cart.total_price, "Added")
                }
                AddItemOutcome::AlreadyInCart => info!(%product_id, "Already in cart"),
            }
        }

        system.carts.increment(&user_id, &teapot).await?;
        system.carts.increment(&user_id, &mug).await?;
        // The mug had two in stock; this one is a no-op.
        system.carts.increment(&user_id, &mug).await?;
        system.carts.decrement(&user_id, &teapot).await?;

        let cart = system.carts.get_or_create(&user_id).await?;
        println!("{}", serde_json::to_string_pretty(&cart)?);

        let cart = system.carts.remove_line(&user_id, &mug).await?;
        info!(total = %cart.total_price, lines = cart.line_items.len(), "Mug removed");
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(tracing::info_span!("cart", %user_id))
    .await?;

    // --- Cleanup ---
    system.delete_user(&user_id).await?;
    let remaining = system.carts.list_all(&user_id).await?;
    info!(carts = remaining.len(), "After deleting the user");

    system.shutdown().await?;
    info!("Demo finished");
    Ok(())
}
