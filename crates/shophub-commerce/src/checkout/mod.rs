//! Checkout module.
//!
//! Contains the draft shipping/payment form and its readiness check.

mod form;

pub use form::{CheckoutField, CheckoutForm, UnknownField};
