//! Domain data types shared by the actors, clients and services.
//!
//! Each entity lives in its own file together with its identifier newtype and
//! the payloads its actor accepts.

pub mod cart;
pub mod product;
pub mod user;

pub use cart::*;
pub use product::*;
pub use user::*;
