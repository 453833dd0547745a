//! End-to-end properties of the storefront session.

use std::sync::Arc;

use shophub_commerce::prelude::*;

fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin())
}

fn logged_in() -> Session {
    let mut session = Session::new(catalog());
    session.login("a@b.com", "x").unwrap();
    session
}

fn fill_checkout(session: &mut Session) {
    let values = [
        (CheckoutField::FullName, "Ada Lovelace"),
        (CheckoutField::Address, "12 Analytical Row"),
        (CheckoutField::City, "London"),
        (CheckoutField::ZipCode, "N1 9GU"),
        (CheckoutField::CardNumber, "4111111111111111"),
        (CheckoutField::ExpiryDate, "12/30"),
        (CheckoutField::Cvv, "123"),
    ];
    for (field, value) in values {
        session.update_checkout_field(field, value).unwrap();
    }
}

fn expected_total(cart: &Cart) -> i64 {
    cart.lines()
        .iter()
        .map(|l| l.product.price.amount_cents * i64::from(l.quantity))
        .sum()
}

#[test]
fn add_twice_yields_one_line_with_quantity_two() {
    for product in Catalog::builtin().list_products() {
        let mut cart = Cart::new(Currency::USD);
        cart.add(product);
        cart.add(product);

        assert_eq!(cart.len(), 1, "product {}", product.id);
        assert_eq!(cart.line(product.id).unwrap().quantity, 2);
    }
}

#[test]
fn repeated_decrements_never_drop_below_one() {
    let catalog = Catalog::builtin();
    let mut cart = Cart::new(Currency::USD);
    for product in catalog.list_products() {
        cart.add(product);
        cart.add(product);
        cart.add(product);
    }

    for _ in 0..10 {
        for product in catalog.list_products() {
            cart.set_quantity(product.id, -1);
        }
        assert!(cart.lines().iter().all(|l| l.quantity >= 1));
    }
    assert_eq!(cart.count(), catalog.len() as u64);
}

#[test]
fn removal_drops_line_and_totals() {
    let catalog = Catalog::builtin();
    let mut cart = Cart::new(Currency::USD);
    for product in catalog.list_products() {
        cart.add(product);
    }

    let removed = catalog.list_products()[2].id;
    let price = catalog.product(removed).unwrap().price.amount_cents;
    let before_total = cart.total().amount_cents;
    let before_count = cart.count();

    assert!(cart.remove(removed));
    assert!(cart.line(removed).is_none());
    assert_eq!(cart.count(), before_count - 1);
    assert_eq!(cart.total().amount_cents, before_total - price);
}

#[test]
fn total_matches_sum_of_lines() {
    let catalog = Catalog::builtin();
    let mut cart = Cart::new(Currency::USD);
    // Deterministic walk over add/adjust/remove.
    let deltas = [3_i64, -1, 0, 7, -20, 2, -2, 5];
    for (step, product) in catalog.list_products().iter().cycle().take(40).enumerate() {
        cart.add(product);
        cart.set_quantity(product.id, deltas[step % deltas.len()]);
        if step % 11 == 10 {
            cart.remove(product.id);
        }
        assert_eq!(cart.total().amount_cents, expected_total(&cart));
        assert_eq!(
            cart.count(),
            cart.lines().iter().map(|l| u64::from(l.quantity)).sum::<u64>()
        );
    }
}

#[test]
fn login_page_refuses_every_other_trigger() {
    let mut session = Session::new(catalog());
    let triggers = vec![
        Action::Logout,
        Action::ShowProducts,
        Action::ShowCart,
        Action::ProceedToCheckout,
        Action::SubmitPayment,
        Action::ContinueShopping,
        Action::SelectCategory("Home".to_string()),
        Action::AddToCart(ProductId::new(1)),
        Action::UpdateQuantity {
            product_id: ProductId::new(1),
            delta: 1,
        },
        Action::RemoveFromCart(ProductId::new(1)),
        Action::UpdateCheckoutField {
            field: CheckoutField::Cvv,
            value: "1".to_string(),
        },
        Action::ToggleNav,
        Action::Login {
            email: String::new(),
            password: "x".into(),
        },
    ];

    for action in triggers {
        let name = action.name();
        let err = session.apply(action).unwrap_err();
        assert!(err.is_auth_failure(), "{name}: {err}");
        assert_eq!(session.page(), Page::Login, "{name}");
        assert!(session.user().is_none());
        assert!(session.cart().is_empty());
    }
}

#[test]
fn logout_from_cart_empties_cart_for_next_login() {
    let mut session = logged_in();
    session.add_to_cart(ProductId::new(1)).unwrap();
    session.add_to_cart(ProductId::new(3)).unwrap();
    session.show_cart().unwrap();
    assert_eq!(session.page(), Page::Cart);

    assert_eq!(session.logout(), Ok(Page::Login));
    assert!(session.user().is_none());

    session.login("b@c.com", "y").unwrap();
    assert_eq!(session.cart().count(), 0);
    assert!(session.cart().is_empty());
}

#[test]
fn scenario_a_login_derives_display_name() {
    let mut session = Session::new(catalog());
    assert_eq!(session.login("a@b.com", "x"), Ok(Page::Browsing));
    let user = session.user().unwrap();
    assert_eq!(user.display_name, "a");
    assert_eq!(user.email, "a@b.com");
}

#[test]
fn scenario_b_totals() {
    let mut session = logged_in();
    session.add_to_cart(ProductId::new(1)).unwrap();
    session.add_to_cart(ProductId::new(1)).unwrap();
    session.add_to_cart(ProductId::new(2)).unwrap();

    assert_eq!(session.cart().count(), 3);
    assert_eq!(session.cart().total().amount_cents, 35997);
    assert_eq!(session.cart().total().display(), "$359.97");
}

#[test]
fn scenario_c_quantity_floor() {
    let mut session = logged_in();
    session.add_to_cart(ProductId::new(1)).unwrap();
    session.add_to_cart(ProductId::new(1)).unwrap();

    session.update_quantity(ProductId::new(1), -5).unwrap();
    assert_eq!(session.cart().line(ProductId::new(1)).unwrap().quantity, 1);
}

#[test]
fn scenario_d_empty_cvv_blocks_success() {
    let mut session = logged_in();
    session.add_to_cart(ProductId::new(1)).unwrap();
    session.show_cart().unwrap();
    session.proceed_to_checkout().unwrap();
    fill_checkout(&mut session);
    session.update_checkout_field(CheckoutField::Cvv, "").unwrap();

    assert!(!session.checkout_form().is_ready_to_submit());
    assert_eq!(
        session.submit_payment(),
        Err(SessionError::CheckoutIncomplete(vec![CheckoutField::Cvv]))
    );
    assert_eq!(session.page(), Page::Checkout);
}

#[test]
fn scenario_e_continue_shopping_clears_cart() {
    let mut session = logged_in();
    session.add_to_cart(ProductId::new(5)).unwrap();
    session.show_cart().unwrap();
    session.proceed_to_checkout().unwrap();
    fill_checkout(&mut session);
    assert_eq!(session.submit_payment(), Ok(Page::Success));

    assert_eq!(session.continue_shopping(), Ok(Page::Browsing));
    assert_eq!(session.cart().count(), 0);
}

#[test]
fn empty_cart_checkout_is_permitted_by_default() {
    let mut session = logged_in();
    session.show_cart().unwrap();
    assert_eq!(session.proceed_to_checkout(), Ok(Page::Checkout));
    fill_checkout(&mut session);
    assert_eq!(session.submit_payment(), Ok(Page::Success));
    assert!(session.cart().total().is_zero());
}

#[test]
fn refusals_leave_state_untouched() {
    let mut session = logged_in();
    session.add_to_cart(ProductId::new(1)).unwrap();
    let before = session.view();

    assert!(session.proceed_to_checkout().is_err());
    assert!(session.submit_payment().is_err());
    assert!(session.continue_shopping().is_err());
    assert!(session.add_to_cart(ProductId::new(999)).is_err());
    assert!(session
        .update_checkout_field(CheckoutField::City, "Oslo")
        .is_err());

    assert_eq!(session.view(), before);
}

#[test]
fn sessions_sharing_a_catalog_are_independent() {
    let shared = catalog();
    let mut first = Session::new(Arc::clone(&shared));
    let mut second = Session::new(Arc::clone(&shared));

    first.login("one@x.io", "pw").unwrap();
    first.add_to_cart(ProductId::new(7)).unwrap();

    assert_eq!(second.page(), Page::Login);
    second.login("two@x.io", "pw").unwrap();
    assert!(second.cart().is_empty());
    assert_eq!(first.cart().count(), 1);
}

#[test]
fn unknown_category_filters_to_nothing() {
    let mut session = logged_in();
    session.select_category("Garden").unwrap();
    assert!(session.view().products.is_empty());

    session.select_category(ALL_CATEGORIES).unwrap();
    assert_eq!(session.view().products.len(), 8);
}
