//! Commerce error types.
//!
//! `SessionError` is a refusal, not a fault: a session that returns one is left
//! exactly as it was before the call.

use crate::checkout::CheckoutField;
use crate::ids::ProductId;
use crate::session::Page;
use thiserror::Error;

/// Errors raised while parsing monetary amounts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Amount is not a decimal number in the currency's precision.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// Currency code not recognised.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}

/// Errors raised while building or loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(ProductId),

    /// Product priced below zero.
    #[error("Product {0} has a negative price")]
    NegativePrice(ProductId),

    /// Product priced in another currency than the catalog.
    #[error("Product {id} is priced in {got}, catalog currency is {expected}")]
    CurrencyMismatch {
        id: ProductId,
        expected: String,
        got: String,
    },

    /// Price could not be parsed.
    #[error("Invalid price for product {id}: {source}")]
    InvalidPrice {
        id: ProductId,
        #[source]
        source: MoneyError,
    },

    /// Catalog document could not be parsed.
    #[error("Catalog parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Refusals returned by the session controller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Login submitted with an empty email or password.
    #[error("Email and password are both required")]
    MissingCredentials,

    /// Action requires a logged-in user.
    #[error("Not logged in")]
    NotAuthenticated,

    /// Login attempted while a user is already logged in.
    #[error("Already logged in")]
    AlreadyAuthenticated,

    /// No transition between these pages.
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition { from: Page, to: Page },

    /// Payment submitted with empty form fields.
    #[error("Checkout incomplete: missing {}", field_list(.0))]
    CheckoutIncomplete(Vec<CheckoutField>),

    /// Checkout entered with an empty cart while that is disabled.
    #[error("Cart is empty")]
    EmptyCart,

    /// Product id not present in the catalog.
    #[error("Product not found: {0}")]
    UnknownProduct(ProductId),

    /// Action only valid on another page.
    #[error("Action requires the {expected} page, current page is {actual}")]
    WrongPage { expected: Page, actual: Page },
}

impl SessionError {
    /// Check if this refusal was caused by a missing identity.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            SessionError::NotAuthenticated | SessionError::MissingCredentials
        )
    }
}

fn field_list(fields: &[CheckoutField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}
