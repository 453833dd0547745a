//! Category labels derived from the catalog.

use crate::catalog::Product;

/// Synthetic filter label matching every product.
pub const ALL_CATEGORIES: &str = "All";

/// Distinct category labels, "All" first, then in first-seen order.
pub fn category_labels(products: &[Product]) -> Vec<String> {
    let mut labels = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if !labels.iter().skip(1).any(|l| l == &product.category) {
            labels.push(product.category.clone());
        }
    }
    labels
}

/// Check if a product passes a category filter.
pub fn matches_filter(product: &Product, filter: &str) -> bool {
    filter == ALL_CATEGORIES || product.in_category(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: u32, category: &str) -> Product {
        Product::new(id, format!("p{id}"), Money::zero(Currency::USD), category)
    }

    #[test]
    fn test_labels_first_seen_order() {
        let products = vec![
            product(1, "Home"),
            product(2, "Fashion"),
            product(3, "Home"),
            product(4, "Electronics"),
        ];
        assert_eq!(
            category_labels(&products),
            vec!["All", "Home", "Fashion", "Electronics"]
        );
    }

    #[test]
    fn test_labels_empty_catalog() {
        assert_eq!(category_labels(&[]), vec!["All"]);
    }
}
