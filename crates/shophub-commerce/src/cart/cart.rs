//! Cart and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A shopping cart.
///
/// Lines are kept in first-add order, with at most one line per product and
/// every quantity at least 1. Totals are recomputed from the lines on every
/// read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart whose totals are expressed in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line for the product, or appends a new line
    /// with quantity 1.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(1);
            debug!(product_id = %product.id, quantity = line.quantity, "cart line incremented");
            return;
        }

        self.lines.push(CartLine::new(product.clone()));
        debug!(product_id = %product.id, "cart line added");
    }

    /// Shift a line's quantity by `delta`, never going below 1.
    ///
    /// Returns false when the product has no line; nothing changes then.
    pub fn set_quantity(&mut self, product_id: ProductId, delta: i64) -> bool {
        let Some(line) = self.line_mut(product_id) else {
            return false;
        };

        let shifted = i64::from(line.quantity).saturating_add(delta);
        line.quantity = u32::try_from(shifted.max(1)).unwrap_or(u32::MAX);
        debug!(%product_id, delta, quantity = line.quantity, "cart quantity changed");
        true
    }

    /// Remove a product's line.
    ///
    /// Returns false when the product has no line.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        let removed = self.lines.len() < len_before;
        if removed {
            debug!(%product_id, "cart line removed");
        }
        removed
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `price x quantity` over all lines.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(self.currency), |acc, l| acc.saturating_add(&l.line_total()))
    }

    /// Sum of quantities over all lines.
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Lines in first-add order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Currency of the cart totals.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product.id == product_id)
    }
}

/// A product held in the cart with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The catalog product.
    pub product: Product,
    /// Units held, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// `price x quantity` for this line.
    pub fn line_total(&self) -> Money {
        self.product.price.saturating_mul(self.quantity)
    }
}
