//! Product catalog module.
//!
//! Contains the product type, the read-only catalog and category filtering.

#[allow(clippy::module_inception)]
mod catalog;
mod category;
mod product;

pub use catalog::Catalog;
pub use category::{category_labels, matches_filter, ALL_CATEGORIES};
pub use product::{PriceInput, Product, ProductRecord};
