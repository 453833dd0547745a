//! User actions the presentation layer sends into a session.

use crate::checkout::CheckoutField;
use crate::ids::ProductId;
use crate::session::Password;
use serde::{Deserialize, Serialize};

/// One discrete user trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "args", rename_all = "snake_case")]
pub enum Action {
    Login { email: String, password: Password },
    Logout,
    ShowProducts,
    ShowCart,
    ProceedToCheckout,
    SubmitPayment,
    ContinueShopping,
    SelectCategory(String),
    AddToCart(ProductId),
    UpdateQuantity { product_id: ProductId, delta: i64 },
    RemoveFromCart(ProductId),
    UpdateCheckoutField { field: CheckoutField, value: String },
    ToggleNav,
}

impl Action {
    /// Stable name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Login { .. } => "login",
            Action::Logout => "logout",
            Action::ShowProducts => "show_products",
            Action::ShowCart => "show_cart",
            Action::ProceedToCheckout => "proceed_to_checkout",
            Action::SubmitPayment => "submit_payment",
            Action::ContinueShopping => "continue_shopping",
            Action::SelectCategory(_) => "select_category",
            Action::AddToCart(_) => "add_to_cart",
            Action::UpdateQuantity { .. } => "update_quantity",
            Action::RemoveFromCart(_) => "remove_from_cart",
            Action::UpdateCheckoutField { .. } => "update_checkout_field",
            Action::ToggleNav => "toggle_nav",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(Action::AddToCart(ProductId::new(2))).unwrap();
        assert_eq!(json, serde_json::json!({ "action": "add_to_cart", "args": 2 }));

        let action: Action = serde_json::from_value(serde_json::json!({ "action": "logout" })).unwrap();
        assert_eq!(action, Action::Logout);
    }

    #[test]
    fn test_login_debug_hides_password() {
        let action = Action::Login {
            email: "a@b.com".to_string(),
            password: "secret".into(),
        };
        assert!(!format!("{action:?}").contains("secret"));
        assert_eq!(action.name(), "login");
    }

    #[test]
    fn test_login_serializes_without_password() {
        let action = Action::Login {
            email: "a@b.com".to_string(),
            password: "secret".into(),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "action": "login",
                "args": { "email": "a@b.com", "password": "[REDACTED]" }
            })
        );

        let parsed: Action = serde_json::from_value(serde_json::json!({
            "action": "login",
            "args": { "email": "a@b.com", "password": "secret" }
        }))
        .unwrap();
        assert_eq!(parsed, action);
    }
}
