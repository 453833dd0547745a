//! Storefront pages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pages a session can be on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Credentials form. Initial page, and the only one reachable without a user.
    #[default]
    Login,
    /// Product listing with category filter.
    Browsing,
    /// Cart review.
    Cart,
    /// Shipping and payment form.
    Checkout,
    /// Order confirmation.
    Success,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Login,
        Page::Browsing,
        Page::Cart,
        Page::Checkout,
        Page::Success,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Browsing => "browsing",
            Page::Cart => "cart",
            Page::Checkout => "checkout",
            Page::Success => "success",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Page::Login => "Sign In",
            Page::Browsing => "Products",
            Page::Cart => "Shopping Cart",
            Page::Checkout => "Checkout",
            Page::Success => "Order Confirmed",
        }
    }

    /// Check if the page needs a logged-in user.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Page::Login)
    }

    /// Pages reachable from this one by the flow buttons, ignoring header navigation.
    pub fn flow_targets(&self) -> &'static [Page] {
        match self {
            Page::Login => &[Page::Browsing],
            Page::Browsing => &[Page::Cart, Page::Login],
            Page::Cart => &[Page::Browsing, Page::Checkout, Page::Login],
            Page::Checkout => &[Page::Success, Page::Login],
            Page::Success => &[Page::Browsing, Page::Login],
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_login_is_public() {
        let public: Vec<Page> = Page::ALL.into_iter().filter(|p| !p.requires_auth()).collect();
        assert_eq!(public, vec![Page::Login]);
    }

    #[test]
    fn test_every_authenticated_page_can_log_out() {
        for page in Page::ALL.into_iter().filter(Page::requires_auth) {
            assert!(page.flow_targets().contains(&Page::Login), "{page}");
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Page::Browsing).unwrap(), "\"browsing\"");
        let page: Page = serde_json::from_str("\"success\"").unwrap();
        assert_eq!(page, Page::Success);
    }
}
