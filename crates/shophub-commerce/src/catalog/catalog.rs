//! The read-only catalog provider.

use crate::catalog::category::{category_labels, matches_filter};
use crate::catalog::product::ProductRecord;
use crate::catalog::Product;
use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An immutable, ordered product catalog.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    currency: Currency,
}

/// Shape of a catalog TOML document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    products: Vec<ProductRecord>,
}

impl Catalog {
    /// Build a catalog, checking id uniqueness, price sign and currency.
    pub fn new(products: Vec<Product>, currency: Currency) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProductId(product.id));
            }
            if product.price.is_negative() {
                return Err(CatalogError::NegativePrice(product.id));
            }
            if product.price.currency != currency {
                return Err(CatalogError::CurrencyMismatch {
                    id: product.id,
                    expected: currency.code().to_string(),
                    got: product.price.currency.code().to_string(),
                });
            }
        }
        Ok(Self { products, currency })
    }

    /// Build a catalog from configuration records.
    pub fn from_records(
        records: Vec<ProductRecord>,
        currency: Currency,
    ) -> Result<Self, CatalogError> {
        let products = records
            .into_iter()
            .map(|r| r.into_product(currency))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(products, currency)
    }

    /// Parse a TOML document made of `[[products]]` tables.
    pub fn from_toml_str(source: &str, currency: Currency) -> Result<Self, CatalogError> {
        let document: CatalogDocument = toml::from_str(source)?;
        Self::from_records(document.products, currency)
    }

    /// The demo catalog shipped with the storefront.
    pub fn builtin() -> Self {
        const IMAGE_BASE: &str = "https://images.unsplash.com";
        let usd = |cents| Money::new(cents, Currency::USD);
        let entries = [
            (1, "Wireless Headphones", 7999, "photo-1505740420928-5e560c06d30e", "Premium wireless headphones", "Electronics"),
            (2, "Smart Watch", 19999, "photo-1523275335684-37898b6baf30", "Fitness tracking smartwatch", "Electronics"),
            (3, "Running Shoes", 8999, "photo-1542291026-7eec264c27ff", "Comfortable running shoes", "Fashion"),
            (4, "Coffee Maker", 4999, "photo-1517668808822-9ebb02f2a0e6", "Automatic coffee maker", "Home"),
            (5, "Backpack", 3999, "photo-1553062407-98eeb64c6a62", "Durable travel backpack", "Fashion"),
            (6, "Desk Lamp", 2999, "photo-1507473885765-e6ed057f782c", "LED desk lamp", "Home"),
            (7, "Bluetooth Speaker", 5999, "photo-1608043152269-423dbba4e7e1", "Portable bluetooth speaker", "Electronics"),
            (8, "Sunglasses", 2499, "photo-1572635196237-14b3f281503f", "UV protection sunglasses", "Fashion"),
        ];

        let products = entries
            .into_iter()
            .map(|(id, name, cents, photo, description, category)| {
                Product::new(id, name, usd(cents), category)
                    .with_image(format!("{IMAGE_BASE}/{photo}?w=400"))
                    .with_description(description)
            })
            .collect();

        Self {
            products,
            currency: Currency::USD,
        }
    }

    /// All products in catalog order.
    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    /// "All" followed by distinct categories in first-seen order.
    pub fn list_categories(&self) -> Vec<String> {
        category_labels(&self.products)
    }

    /// Products in a category, or every product for "All".
    ///
    /// Unknown categories yield an empty list.
    pub fn filter_by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| matches_filter(p, category))
            .collect()
    }

    /// Look up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Currency every price in this catalog is expressed in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
