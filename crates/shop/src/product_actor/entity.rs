//! [`ActorEntity`] implementation for [`Product`].

use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use rust_decimal::Decimal;

fn check_price(price: Decimal) -> Result<(), ProductError> {
    if price.is_sign_negative() {
        return Err(ProductError::ValidationError(format!(
            "price must not be negative: {price}"
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(ProductError::ValidationError(
                "name must not be empty".to_string(),
            ));
        }
        check_price(params.price)?;
        if !params.weight.is_finite() || params.weight < 0.0 {
            return Err(ProductError::ValidationError(format!(
                "invalid weight: {}",
                params.weight
            )));
        }

        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            weight: params.weight,
            stock: params.stock,
            images: params.images,
        })
    }

    /// # Fields Updated
    /// - `price`: must not be negative
    /// - `stock`: catalog stock level
    async fn on_update(
        &mut self,
        update: ProductUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(price) = update.price {
            check_price(price)?;
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(price: Decimal) -> ProductCreate {
        ProductCreate {
            name: "Mug".to_string(),
            price,
            weight: 0.3,
            stock: 2,
            images: vec![],
        }
    }

    #[test]
    fn rejects_negative_price() {
        let result = Product::from_create_params(ProductId(1), create(Decimal::from(-1)));
        assert!(matches!(result, Err(ProductError::ValidationError(_))));
    }

    #[tokio::test]
    async fn update_changes_only_given_fields() {
        let mut product = Product::from_create_params(ProductId(1), create(Decimal::from(8))).unwrap();

        product
            .on_update(
                ProductUpdate {
                    price: None,
                    stock: Some(9),
                },
                &(),
            )
            .await
            .unwrap();

        assert_eq!(product.price, Decimal::from(8));
        assert_eq!(product.stock, 9);
    }
}
