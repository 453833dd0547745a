//! Session module.
//!
//! The session controller owns the current page, the logged-in user, the cart,
//! the checkout draft and the category filter, and is the only way to change
//! them.

mod action;
mod controller;
mod page;
mod user;
mod view;

pub use action::Action;
pub use controller::{Session, SessionConfig};
pub use page::Page;
pub use user::{Password, UserIdentity};
pub use view::{CartLineView, CartView, CheckoutView, SessionView};
