//! Shopping cart module.
//!
//! Contains the cart store and its line type.

#[allow(clippy::module_inception)]
mod cart;

pub use cart::{Cart, CartLine};
