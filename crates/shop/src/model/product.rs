//! Catalog products, as read by the cart.
//!
//! [`Product`] implements [`ActorEntity`](actor_framework::ActorEntity); see
//! [`crate::product_actor`] for how the catalog actor handles it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub weight: f64,
    pub stock: u32,
    pub images: Vec<ProductImage>,
}

impl Product {
    /// URL of the first image, if the product has any.
    pub fn first_image_url(&self) -> Option<&str> {
        self.images.first().map(|image| image.url.as_str())
    }
}

/// Payload for adding a product to the catalog.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: Decimal,
    pub weight: f64,
    pub stock: u32,
    pub images: Vec<ProductImage>,
}

/// Price and stock changes. `None` leaves the field alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub price: Option<Decimal>,
    pub stock: Option<u32>,
}
