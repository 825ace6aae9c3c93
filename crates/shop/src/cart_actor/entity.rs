//! [`ActorEntity`] implementation for [`Cart`].

use super::error::CartStoreError;
use crate::model::{Cart, CartCreate, CartId, CartUpdate, LineItem};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::collections::HashSet;

fn check_lines(lines: &[LineItem]) -> Result<(), CartStoreError> {
    let mut seen = HashSet::new();
    for line in lines {
        if line.count == 0 {
            return Err(CartStoreError::InvalidLine(format!(
                "{} has a count of zero",
                line.product_id
            )));
        }
        if !seen.insert(&line.product_id) {
            return Err(CartStoreError::InvalidLine(format!(
                "{} appears more than once",
                line.product_id
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Update = CartUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CartStoreError;

    /// Carts always start empty.
    fn from_create_params(id: CartId, params: CartCreate) -> Result<Self, Self::Error> {
        Ok(Cart::new(id, params.user_id))
    }

    /// Replaces lines and total together.
    async fn on_update(
        &mut self,
        update: CartUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        check_lines(&update.line_items)?;
        self.line_items = update.line_items;
        self.total_price = update.total_price;
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductId, UserId};
    use rust_decimal::Decimal;

    fn line(product: u32, count: u32) -> LineItem {
        LineItem {
            product_id: ProductId(product),
            name: format!("Product {product}"),
            price: Decimal::from(10),
            weight: 1.0,
            image: None,
            available_stock: 3,
            count,
        }
    }

    #[tokio::test]
    async fn save_rejects_zero_count_and_duplicate_lines() {
        let mut cart = Cart::new(CartId(1), UserId(1));

        let zero = CartUpdate {
            line_items: vec![line(1, 0)],
            total_price: Decimal::ZERO,
        };
        assert!(matches!(
            cart.on_update(zero, &()).await,
            Err(CartStoreError::InvalidLine(_))
        ));

        let duplicate = CartUpdate {
            line_items: vec![line(1, 1), line(1, 2)],
            total_price: Decimal::from(30),
        };
        assert!(matches!(
            cart.on_update(duplicate, &()).await,
            Err(CartStoreError::InvalidLine(_))
        ));
    }

    #[tokio::test]
    async fn save_replaces_lines_and_total() {
        let mut cart = Cart::new(CartId(1), UserId(1));

        cart.on_update(
            CartUpdate {
                line_items: vec![line(1, 2), line(2, 1)],
                total_price: Decimal::from(30),
            },
            &(),
        )
        .await
        .unwrap();

        assert_eq!(cart.line_items.len(), 2);
        assert_eq!(cart.total_price, Decimal::from(30));
    }
}
