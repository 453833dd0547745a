//! Storefront session core for ShopHub.
//!
//! This crate holds the in-memory state of one shopper's visit:
//!
//! - **Catalog**: a read-only product list with category filtering
//! - **Cart**: lines keyed by product, quantities clamped at 1, derived totals
//! - **Checkout**: the draft shipping/payment form and its readiness check
//! - **Session**: the page state machine that guards every transition on login
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use shophub_commerce::prelude::*;
//!
//! let mut session = Session::new(Arc::new(Catalog::builtin()));
//! session.login("a@b.com", "x").unwrap();
//!
//! session.add_to_cart(ProductId::new(1)).unwrap();
//! session.add_to_cart(ProductId::new(1)).unwrap();
//! session.add_to_cart(ProductId::new(2)).unwrap();
//!
//! assert_eq!(session.cart().count(), 3);
//! assert_eq!(session.cart().total().display(), "$359.97");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod session;

pub use error::{CatalogError, MoneyError, SessionError};
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CatalogError, MoneyError, SessionError};
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Product, ProductRecord, ALL_CATEGORIES};

    // Cart
    pub use crate::cart::{Cart, CartLine};

    // Checkout
    pub use crate::checkout::{CheckoutField, CheckoutForm};

    // Session
    pub use crate::session::{Action, Page, Session, SessionConfig, SessionView, UserIdentity};
}
