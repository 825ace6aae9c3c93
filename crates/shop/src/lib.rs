//! # Shop
//!
//! A shop backend built on [`actor_framework`]: accounts with email
//! activation, a product catalog, and one shopping cart per user.
//!
//! - [`model`]: data types ([`User`](model::User), [`Product`](model::Product),
//!   [`Cart`](model::Cart)).
//! - [`user_actor`], [`product_actor`], [`cart_actor`]: one resource actor per
//!   entity type.
//! - [`clients`]: typed clients over those actors.
//! - [`cart_service`]: the cart rules ([`CartService`](cart_service::CartService)).
//! - [`auth`]: registration, activation and login checks.
//! - [`config`], [`lifecycle`]: configuration and the [`ShopSystem`](lifecycle::ShopSystem)
//!   that starts and stops everything.

pub mod auth;
pub mod cart_actor;
pub mod cart_service;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod user_actor;
