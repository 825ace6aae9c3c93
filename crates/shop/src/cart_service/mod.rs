//! # Cart Service
//!
//! The rules for one user's cart. Line state per product:
//!
//! ```text
//!            add                 increment / decrement
//!  absent ─────────▶ present(1) ◀─────────────────────▶ present(n)
//!     ▲                   │
//!     └── remove / clear ─┘
//! ```
//!
//! - `add_item` creates the cart on first use and appends one unit.
//! - `increment` spends one unit of the line's `available_stock`.
//! - `decrement` gives one back, never going below a count of one.
//! - `remove_line` and `clear` drop lines; the cart record itself stays.
//!
//! `total_price` moves by the catalog's current price on every change, so it
//! equals the sum of `price * count` at current prices as long as prices do not
//! change under a populated cart. `remove_line` re-prices the remaining lines,
//! which settles any drift and leaves an empty cart at zero.
//!
//! Every mutating call holds the user's lock from the first read to the save,
//! so concurrent calls for one user apply one after another.

mod error;
mod locks;
mod store;

pub use error::CartError;
pub use store::{CartStore, Catalog};

use crate::model::{Cart, LineItem, Product, ProductId, UserId};
use locks::UserLocks;
use rust_decimal::Decimal;
use serde::Serialize;
use std::future::Future;
use tracing::{debug, info, instrument};

/// Result of [`CartService::add_item`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AddItemOutcome {
    /// The product got a new line; carries the saved cart.
    Added(Cart),
    /// The product already had a line. Nothing changed.
    AlreadyInCart,
}

/// Cart operations over a [`CartStore`] and a [`Catalog`].
#[derive(Clone)]
pub struct CartService<S, C> {
    store: S,
    catalog: C,
    locks: UserLocks,
}

impl<S: CartStore, C: Catalog> CartService<S, C> {
    pub fn new(store: S, catalog: C) -> Self {
        Self {
            store,
            catalog,
            locks: UserLocks::default(),
        }
    }

    /// Returns the user's cart, creating an empty one if there is none.
    #[instrument(skip(self))]
    pub async fn get_or_create(&self, user_id: &UserId) -> Result<Cart, CartError> {
        let _guard = self.locks.acquire(user_id).await;
        self.load_or_create(user_id).await
    }

    /// Puts one unit of `product_id` in the cart.
    ///
    /// A product already in the cart is left alone and reported as
    /// [`AddItemOutcome::AlreadyInCart`].
    #[instrument(skip(self))]
    pub async fn add_item(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<AddItemOutcome, CartError> {
        let _guard = self.locks.acquire(user_id).await;

        let product = self.product(product_id).await?;
        let mut cart = self.load_or_create(user_id).await?;

        if cart.line(product_id).is_some() {
            debug!("Already in cart");
            return Ok(AddItemOutcome::AlreadyInCart);
        }
        if product.stock == 0 {
            return Err(CartError::OutOfStock(product_id.clone()));
        }

        cart.total_price = add_price(&cart, product.price)?;
        cart.line_items.push(LineItem::snapshot(&product));

        let saved = self.store.save(&cart).await?;
        info!(total = %saved.total_price, "Line added");
        Ok(AddItemOutcome::Added(saved))
    }

    /// Adds a unit while the line has stock left; otherwise returns the cart
    /// unchanged.
    #[instrument(skip(self))]
    pub async fn increment(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<Cart, CartError> {
        let _guard = self.locks.acquire(user_id).await;

        let (mut cart, index) = self.cart_with_line(user_id, product_id).await?;
        let product = self.product(product_id).await?;

        if cart.line_items[index].available_stock == 0 {
            debug!(count = cart.line_items[index].count, "No stock left on line");
            return Ok(cart);
        }
        cart.total_price = add_price(&cart, product.price)?;
        let line = &mut cart.line_items[index];
        line.count += 1;
        line.available_stock -= 1;

        let saved = self.store.save(&cart).await?;
        info!(total = %saved.total_price, "Line incremented");
        Ok(saved)
    }

    /// Removes a unit while the line holds more than one; otherwise returns the
    /// cart unchanged.
    #[instrument(skip(self))]
    pub async fn decrement(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<Cart, CartError> {
        let _guard = self.locks.acquire(user_id).await;

        let (mut cart, index) = self.cart_with_line(user_id, product_id).await?;
        let product = self.product(product_id).await?;

        if cart.line_items[index].count <= 1 {
            debug!("Line already at one unit");
            return Ok(cart);
        }
        cart.total_price = cart
            .total_price
            .checked_sub(product.price)
            .ok_or_else(|| CartError::TotalOverflow(cart.user_id.clone()))?;
        let line = &mut cart.line_items[index];
        line.count -= 1;
        line.available_stock += 1;

        let saved = self.store.save(&cart).await?;
        info!(total = %saved.total_price, "Line decremented");
        Ok(saved)
    }

    /// Drops the line for `product_id`.
    ///
    /// The total becomes the sum of `count` times the current catalog price
    /// over the remaining lines, using a line's own price when its product is
    /// gone from the catalog. With prices unchanged this lowers the total by
    /// the removed line's price times its count.
    #[instrument(skip(self))]
    pub async fn remove_line(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<Cart, CartError> {
        let _guard = self.locks.acquire(user_id).await;

        let (mut cart, index) = self.cart_with_line(user_id, product_id).await?;
        cart.line_items.remove(index);
        cart.total_price = self.priced_total(&cart).await?;

        let saved = self.store.save(&cart).await?;
        info!(total = %saved.total_price, "Line removed");
        Ok(saved)
    }

    /// Empties the cart and zeroes the total. The cart record stays.
    #[instrument(skip(self))]
    pub async fn clear(&self, user_id: &UserId) -> Result<Cart, CartError> {
        let _guard = self.locks.acquire(user_id).await;

        let mut cart = self.existing_cart(user_id).await?;
        cart.line_items.clear();
        cart.total_price = Decimal::ZERO;

        let saved = self.store.save(&cart).await?;
        info!("Cart cleared");
        Ok(saved)
    }

    /// Every cart record of the user. There is at most one.
    #[instrument(skip(self))]
    pub async fn list_all(&self, user_id: &UserId) -> Result<Vec<Cart>, CartError> {
        Ok(self.store.list_by_user(user_id).await?)
    }

    /// Deletes the user's cart record, if any.
    #[instrument(skip(self))]
    pub async fn discard(&self, user_id: &UserId) -> Result<(), CartError> {
        let _guard = self.locks.acquire(user_id).await;
        self.delete_cart(user_id).await
    }

    /// Deletes the user's cart, then runs `then` while still holding the
    /// user's lock, so no cart operation can slip in between.
    #[instrument(skip(self, then))]
    pub async fn discard_and_then<F, T, E>(&self, user_id: &UserId, then: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
        E: From<CartError>,
    {
        let _guard = self.locks.acquire(user_id).await;
        self.delete_cart(user_id).await?;
        then.await
    }

    async fn delete_cart(&self, user_id: &UserId) -> Result<(), CartError> {
        let removed = self.store.delete_by_user(user_id).await?;
        info!(removed, "Cart discarded");
        Ok(())
    }

    async fn priced_total(&self, cart: &Cart) -> Result<Decimal, CartError> {
        let mut total = Decimal::ZERO;
        for line in &cart.line_items {
            let unit_price = match self.catalog.find_product_by_id(&line.product_id).await? {
                Some(product) => product.price,
                None => line.price,
            };
            total = unit_price
                .checked_mul(Decimal::from(line.count))
                .and_then(|subtotal| total.checked_add(subtotal))
                .ok_or_else(|| CartError::TotalOverflow(cart.user_id.clone()))?;
        }
        Ok(total)
    }

    async fn load_or_create(&self, user_id: &UserId) -> Result<Cart, CartError> {
        match self.store.find_by_user(user_id).await? {
            Some(cart) => Ok(cart),
            None => {
                let cart = self.store.create(user_id).await?;
                info!(cart_id = %cart.id, "Created cart");
                Ok(cart)
            }
        }
    }

    async fn existing_cart(&self, user_id: &UserId) -> Result<Cart, CartError> {
        self.store
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| CartError::CartNotFound(user_id.clone()))
    }

    async fn cart_with_line(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<(Cart, usize), CartError> {
        let cart = self.existing_cart(user_id).await?;
        match cart.line_position(product_id) {
            Some(index) => Ok((cart, index)),
            None => Err(CartError::LineNotFound {
                user_id: user_id.clone(),
                product_id: product_id.clone(),
            }),
        }
    }

    async fn product(&self, product_id: &ProductId) -> Result<Product, CartError> {
        self.catalog
            .find_product_by_id(product_id)
            .await?
            .ok_or_else(|| CartError::ItemNotFound(product_id.clone()))
    }
}

fn add_price(cart: &Cart, price: Decimal) -> Result<Decimal, CartError> {
    cart.total_price
        .checked_add(price)
        .ok_or_else(|| CartError::TotalOverflow(cart.user_id.clone()))
}
