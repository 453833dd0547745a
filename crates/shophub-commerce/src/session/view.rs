//! Read-only snapshot handed to the presentation layer.

use crate::catalog::Product;
use crate::checkout::{CheckoutField, CheckoutForm};
use crate::ids::ProductId;
use crate::money::Money;
use crate::session::{Page, Session, UserIdentity};
use serde::Serialize;

/// Everything needed to render the current page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub page: Page,
    pub user: Option<UserIdentity>,
    pub nav_open: bool,
    pub category: String,
    pub categories: Vec<String>,
    /// Catalog filtered by `category`.
    pub products: Vec<Product>,
    pub cart: CartView,
    pub checkout: CheckoutView,
}

/// Cart contents with derived totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub count: u64,
    pub total: Money,
}

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLineView {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

/// Draft form and its readiness.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutView {
    pub form: CheckoutForm,
    pub ready: bool,
    pub missing: Vec<CheckoutField>,
}

impl SessionView {
    pub(crate) fn capture(session: &Session) -> Self {
        let catalog = session.catalog();
        let cart = session.cart();
        let form = session.checkout_form();

        Self {
            page: session.page(),
            user: session.user().cloned(),
            nav_open: session.is_nav_open(),
            category: session.category().to_string(),
            categories: catalog.list_categories(),
            products: catalog
                .filter_by_category(session.category())
                .into_iter()
                .cloned()
                .collect(),
            cart: CartView {
                lines: cart
                    .lines()
                    .iter()
                    .map(|line| CartLineView {
                        product_id: line.product.id,
                        name: line.product.name.clone(),
                        image: line.product.image.clone(),
                        unit_price: line.product.price,
                        quantity: line.quantity,
                        line_total: line.line_total(),
                    })
                    .collect(),
                count: cart.count(),
                total: cart.total(),
            },
            checkout: CheckoutView {
                form: form.clone(),
                ready: form.is_ready_to_submit(),
                missing: form.missing_fields(),
            },
        }
    }
}
