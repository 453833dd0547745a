//! Session controller: the storefront state machine.

use crate::cart::Cart;
use crate::catalog::{Catalog, ALL_CATEGORIES};
use crate::checkout::{CheckoutField, CheckoutForm};
use crate::error::SessionError;
use crate::ids::ProductId;
use crate::session::{Action, Page, SessionView, UserIdentity};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Behaviour switches for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Allow entering checkout with an empty cart.
    pub allow_empty_checkout: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            allow_empty_checkout: true,
        }
    }
}

/// State of one shopper's visit.
///
/// Every page except [`Page::Login`] requires a user; the controller refuses
/// any action that would reach one without it. A refused action leaves the
/// session unchanged.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Arc<Catalog>,
    config: SessionConfig,
    page: Page,
    user: Option<UserIdentity>,
    cart: Cart,
    checkout: CheckoutForm,
    category: String,
    nav_open: bool,
}

impl Session {
    /// Create a session on the login page.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_config(catalog, SessionConfig::default())
    }

    /// Create a session with explicit configuration.
    pub fn with_config(catalog: Arc<Catalog>, config: SessionConfig) -> Self {
        let cart = Cart::new(catalog.currency());
        Self {
            catalog,
            config,
            page: Page::Login,
            user: None,
            cart,
            checkout: CheckoutForm::new(),
            category: ALL_CATEGORIES.to_string(),
            nav_open: false,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn checkout_form(&self) -> &CheckoutForm {
        &self.checkout
    }

    /// Current category filter.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Whether the mobile navigation menu is open.
    pub fn is_nav_open(&self) -> bool {
        self.nav_open
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Log in with any non-empty email and password.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Page, SessionError> {
        if self.user.is_some() {
            return Err(self.refuse(SessionError::AlreadyAuthenticated));
        }
        if email.is_empty() || password.is_empty() {
            return Err(self.refuse(SessionError::MissingCredentials));
        }

        let user = UserIdentity::from_email(email);
        info!(user = %user.display_name, "user logged in");
        self.user = Some(user);
        self.go_to(Page::Browsing);
        Ok(self.page)
    }

    /// Log out, dropping the user, the cart and any UI transients.
    pub fn logout(&mut self) -> Result<Page, SessionError> {
        self.require_auth()?;

        if let Some(user) = self.user.take() {
            info!(user = %user.display_name, items = self.cart.count(), "user logged out");
        }
        self.cart.clear();
        self.go_to(Page::Login);
        Ok(self.page)
    }

    /// Header navigation to the product listing.
    pub fn show_products(&mut self) -> Result<Page, SessionError> {
        self.require_access(Page::Browsing)?;
        self.go_to(Page::Browsing);
        Ok(self.page)
    }

    /// Header navigation to the cart.
    pub fn show_cart(&mut self) -> Result<Page, SessionError> {
        self.require_access(Page::Cart)?;
        self.go_to(Page::Cart);
        Ok(self.page)
    }

    /// Move from the cart to a fresh checkout form.
    pub fn proceed_to_checkout(&mut self) -> Result<Page, SessionError> {
        self.require_flow(Page::Checkout)?;
        if self.cart.is_empty() && !self.config.allow_empty_checkout {
            return Err(self.refuse(SessionError::EmptyCart));
        }

        self.go_to(Page::Checkout);
        self.checkout = CheckoutForm::new();
        Ok(self.page)
    }

    /// Submit the checkout form. No payment is taken.
    pub fn submit_payment(&mut self) -> Result<Page, SessionError> {
        self.require_flow(Page::Success)?;

        let missing = self.checkout.missing_fields();
        if !missing.is_empty() {
            return Err(self.refuse(SessionError::CheckoutIncomplete(missing)));
        }

        info!(
            items = self.cart.count(),
            total = %self.cart.total(),
            "order placed"
        );
        self.go_to(Page::Success);
        Ok(self.page)
    }

    /// Leave the confirmation page with an emptied cart.
    pub fn continue_shopping(&mut self) -> Result<Page, SessionError> {
        self.require_flow(Page::Browsing)?;

        self.cart.clear();
        info!("cart cleared after order");
        self.go_to(Page::Browsing);
        Ok(self.page)
    }

    /// Set the product listing filter. Unknown labels simply match nothing.
    pub fn select_category(&mut self, category: impl Into<String>) -> Result<Page, SessionError> {
        self.require_auth()?;
        self.category = category.into();
        debug!(category = %self.category, "category selected");
        Ok(self.page)
    }

    /// Add one unit of a catalog product to the cart.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<Page, SessionError> {
        self.require_auth()?;
        let Some(product) = self.catalog.product(product_id) else {
            return Err(self.refuse(SessionError::UnknownProduct(product_id)));
        };
        self.cart.add(product);
        Ok(self.page)
    }

    /// Shift a cart line's quantity, clamped at 1. Missing lines are ignored.
    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) -> Result<Page, SessionError> {
        self.require_auth()?;
        self.cart.set_quantity(product_id, delta);
        Ok(self.page)
    }

    /// Drop a cart line. Missing lines are ignored.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> Result<Page, SessionError> {
        self.require_auth()?;
        self.cart.remove(product_id);
        Ok(self.page)
    }

    /// Edit one checkout form field.
    pub fn update_checkout_field(
        &mut self,
        field: CheckoutField,
        value: impl Into<String>,
    ) -> Result<Page, SessionError> {
        self.require_auth()?;
        if self.page != Page::Checkout {
            return Err(self.refuse(SessionError::WrongPage {
                expected: Page::Checkout,
                actual: self.page,
            }));
        }
        self.checkout.update(field, value);
        Ok(self.page)
    }

    /// Open or close the mobile navigation menu.
    pub fn toggle_nav(&mut self) -> Result<Page, SessionError> {
        self.require_auth()?;
        self.nav_open = !self.nav_open;
        Ok(self.page)
    }

    /// Dispatch an action to the matching operation.
    pub fn apply(&mut self, action: Action) -> Result<Page, SessionError> {
        debug!(action = action.name(), page = %self.page, "applying action");
        match action {
            Action::Login { email, password } => self.login(&email, password.expose()),
            Action::Logout => self.logout(),
            Action::ShowProducts => self.show_products(),
            Action::ShowCart => self.show_cart(),
            Action::ProceedToCheckout => self.proceed_to_checkout(),
            Action::SubmitPayment => self.submit_payment(),
            Action::ContinueShopping => self.continue_shopping(),
            Action::SelectCategory(category) => self.select_category(category),
            Action::AddToCart(id) => self.add_to_cart(id),
            Action::UpdateQuantity { product_id, delta } => self.update_quantity(product_id, delta),
            Action::RemoveFromCart(id) => self.remove_from_cart(id),
            Action::UpdateCheckoutField { field, value } => self.update_checkout_field(field, value),
            Action::ToggleNav => self.toggle_nav(),
        }
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> SessionView {
        SessionView::capture(self)
    }

    fn require_auth(&self) -> Result<&UserIdentity, SessionError> {
        match self.user.as_ref() {
            Some(user) => Ok(user),
            None => Err(self.refuse(SessionError::NotAuthenticated)),
        }
    }

    /// Refuse entering a page that needs a user when nobody is logged in.
    fn require_access(&self, to: Page) -> Result<(), SessionError> {
        if to.requires_auth() {
            self.require_auth()?;
        }
        Ok(())
    }

    fn require_flow(&self, to: Page) -> Result<(), SessionError> {
        self.require_access(to)?;
        if self.page.flow_targets().contains(&to) {
            Ok(())
        } else {
            Err(self.refuse(SessionError::InvalidTransition {
                from: self.page,
                to,
            }))
        }
    }

    fn go_to(&mut self, to: Page) {
        let from = self.page;
        if from == Page::Checkout && to != Page::Checkout {
            self.checkout = CheckoutForm::new();
        }
        self.nav_open = false;
        self.page = to;
        debug!(%from, %to, "page changed");
    }

    fn refuse(&self, error: SessionError) -> SessionError {
        debug!(page = %self.page, reason = %error, "action refused");
        error
    }
}
