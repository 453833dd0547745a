//! Product types.

use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are created once when the catalog is built and never change
/// during a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price (non-negative).
    pub price: Money,
    /// Image reference (URL or asset path).
    pub image: String,
    /// Short description for listings.
    pub description: String,
    /// Category label used for filtering.
    pub category: String,
}

impl Product {
    /// Create a new product with empty image and description.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            image: String::new(),
            description: String::new(),
            category: category.into(),
        }
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check if the product belongs to a category label.
    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
    }
}

/// A price as written in a catalog document: `79.99` or `"79.99"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    /// Floating point amount, rounded to the nearest minor unit.
    Decimal(f64),
    /// Exact decimal string.
    Text(String),
}

/// Product entry as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u32,
    pub name: String,
    pub price: PriceInput,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
}

impl ProductRecord {
    /// Convert into a catalog product priced in `currency`.
    pub fn into_product(self, currency: Currency) -> Result<Product, CatalogError> {
        let id = ProductId::new(self.id);
        let price = match self.price {
            PriceInput::Decimal(amount) => Money::try_from_decimal(amount, currency),
            PriceInput::Text(text) => Money::parse(&text, currency),
        }
        .map_err(|source| CatalogError::InvalidPrice { id, source })?;

        Ok(Product {
            id,
            name: self.name,
            price,
            image: self.image,
            description: self.description,
            category: self.category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoneyError;

    #[test]
    fn test_product_builder() {
        let product = Product::new(1, "Wireless Headphones", Money::new(7999, Currency::USD), "Electronics")
            .with_description("Premium wireless headphones")
            .with_image("headphones.jpg");

        assert_eq!(product.id, ProductId::new(1));
        assert!(product.in_category("Electronics"));
        assert!(!product.in_category("electronics"));
        assert_eq!(product.image, "headphones.jpg");
    }

    #[test]
    fn test_record_price_forms() {
        let record = ProductRecord {
            id: 4,
            name: "Coffee Maker".to_string(),
            price: PriceInput::Decimal(49.99),
            image: String::new(),
            description: String::new(),
            category: "Home".to_string(),
        };
        let product = record.clone().into_product(Currency::USD).unwrap();
        assert_eq!(product.price.amount_cents, 4999);

        let text = ProductRecord {
            price: PriceInput::Text("49.99".to_string()),
            ..record.clone()
        };
        assert_eq!(text.into_product(Currency::USD).unwrap().price.amount_cents, 4999);

        let bad = ProductRecord {
            price: PriceInput::Text("forty".to_string()),
            ..record
        };
        assert!(matches!(
            bad.into_product(Currency::USD),
            Err(CatalogError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_record_float_price_must_be_finite_and_in_range() {
        let record = |amount: f64| ProductRecord {
            id: 9,
            name: "Lamp".to_string(),
            price: PriceInput::Decimal(amount),
            image: String::new(),
            description: String::new(),
            category: "Home".to_string(),
        };

        for amount in [f64::NAN, f64::INFINITY] {
            assert!(matches!(
                record(amount).into_product(Currency::USD),
                Err(CatalogError::InvalidPrice {
                    source: MoneyError::InvalidAmount(_),
                    ..
                })
            ));
        }
        assert!(matches!(
            record(1e30).into_product(Currency::USD),
            Err(CatalogError::InvalidPrice {
                source: MoneyError::Overflow,
                ..
            })
        ));
    }
}
