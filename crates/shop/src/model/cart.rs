use crate::model::{Product, ProductId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Carts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// One product in a cart.
///
/// `name`, `price`, `weight` and `image` are copied from the catalog when the
/// line is added and are not refreshed afterwards. `available_stock` is a
/// line-local counter: it starts at catalog stock minus one and moves opposite
/// to `count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub weight: f64,
    pub image: Option<String>,
    pub available_stock: u32,
    pub count: u32,
}

impl LineItem {
    /// A fresh line with one unit of `product`. The caller checks stock.
    pub fn snapshot(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            weight: product.weight,
            image: product.first_image_url().map(str::to_owned),
            available_stock: product.stock.saturating_sub(1),
            count: 1,
        }
    }
}

/// A user's shopping cart.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// Lines keep insertion order. `total_price` is maintained by
/// [`CartService`](crate::cart_service::CartService) on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: CartId,
    pub user_id: UserId,
    pub line_items: Vec<LineItem>,
    pub total_price: Decimal,
}

impl Cart {
    pub fn new(id: CartId, user_id: UserId) -> Self {
        Self {
            id,
            user_id,
            line_items: Vec::new(),
            total_price: Decimal::ZERO,
        }
    }

    pub fn line(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.line_items
            .iter()
            .find(|line| &line.product_id == product_id)
    }

    pub(crate) fn line_position(&self, product_id: &ProductId) -> Option<usize> {
        self.line_items
            .iter()
            .position(|line| &line.product_id == product_id)
    }

    /// Sum of `price * count` over the line snapshots.
    pub fn snapshot_total(&self) -> Decimal {
        self.line_items
            .iter()
            .map(|line| line.price * Decimal::from(line.count))
            .sum()
    }
}

/// Payload for creating an empty cart.
#[derive(Debug, Clone)]
pub struct CartCreate {
    pub user_id: UserId,
}

/// Full replacement of a cart's contents, written by `CartStore::save`.
#[derive(Debug, Clone)]
pub struct CartUpdate {
    pub line_items: Vec<LineItem>,
    pub total_price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductImage;

    fn product(images: Vec<&str>, stock: u32) -> Product {
        Product {
            id: ProductId(3),
            name: "Kettle".to_string(),
            price: Decimal::new(2499, 2),
            weight: 1.2,
            stock,
            images: images
                .into_iter()
                .map(|url| ProductImage {
                    url: url.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn snapshot_copies_first_image_and_reserves_one_unit() {
        let line = LineItem::snapshot(&product(vec!["a.png", "b.png"], 5));

        assert_eq!(line.image.as_deref(), Some("a.png"));
        assert_eq!(line.available_stock, 4);
        assert_eq!(line.count, 1);
        assert_eq!(line.price, Decimal::new(2499, 2));
    }

    #[test]
    fn snapshot_without_images_has_no_image() {
        let line = LineItem::snapshot(&product(vec![], 1));

        assert_eq!(line.image, None);
        assert_eq!(line.available_stock, 0);
    }

    #[test]
    fn snapshot_total_sums_price_times_count() {
        let mut cart = Cart::new(CartId(1), UserId(1));
        let mut line = LineItem::snapshot(&product(vec![], 5));
        line.count = 3;
        cart.line_items.push(line);

        assert_eq!(cart.snapshot_total(), Decimal::new(7497, 2));
        assert_eq!(format!("{}", cart.id), "cart_1");
    }
}
