//! Text rendering of a session snapshot.

use shophub_commerce::catalog::Product;
use shophub_commerce::checkout::CheckoutField;
use shophub_commerce::session::{CartView, CheckoutView, Page, SessionView};

use crate::output::{page_badge, Output};

/// Print the current page.
pub fn render(view: &SessionView, out: &Output) {
    if out.is_json() {
        out.json(view);
        return;
    }

    out.header(&format!(
        "ShopHub · {} [{}]",
        view.page.display_name(),
        page_badge(view.page.as_str())
    ));
    for line in page_lines(view) {
        out.line(&line);
    }
}

/// Plain-text body of the current page.
pub fn page_lines(view: &SessionView) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(ref user) = view.user {
        lines.push(format!(
            "Signed in as {} · cart: {} item(s)",
            user.display_name, view.cart.count
        ));
        if view.nav_open {
            lines.push("Menu: products · cart · logout".to_string());
        }
        lines.push(String::new());
    }

    match view.page {
        Page::Login => {
            lines.push("Welcome to ShopHub. Sign in to start shopping.".to_string());
            lines.push("  login <email> <password>".to_string());
        }
        Page::Browsing => browsing_lines(view, &mut lines),
        Page::Cart => cart_lines(&view.cart, &mut lines),
        Page::Checkout => checkout_lines(&view.cart, &view.checkout, &mut lines),
        Page::Success => {
            let name = view
                .user
                .as_ref()
                .map(|u| u.display_name.as_str())
                .unwrap_or_default();
            lines.push(format!("Thank you for your order, {name}!"));
            lines.push(format!(
                "{} item(s), {} total.",
                view.cart.count,
                view.cart.total.display()
            ));
            lines.push("Type `continue` to keep shopping.".to_string());
        }
    }

    lines
}

fn browsing_lines(view: &SessionView, lines: &mut Vec<String>) {
    let categories: Vec<String> = view
        .categories
        .iter()
        .map(|c| {
            if *c == view.category {
                format!("[{c}]")
            } else {
                c.clone()
            }
        })
        .collect();
    lines.push(format!("Categories: {}", categories.join(" ")));

    if view.products.is_empty() {
        lines.push(format!("No products in \"{}\".", view.category));
        return;
    }
    for product in &view.products {
        lines.push(product_row(product));
    }
}

/// One catalog row: id, name, category, price.
pub fn product_row(product: &Product) -> String {
    format!(
        "{:>3}  {:<28} {:<12} {:>10}",
        product.id,
        product.name,
        product.category,
        product.price.display()
    )
}

fn cart_lines(cart: &CartView, lines: &mut Vec<String>) {
    if cart.lines.is_empty() {
        lines.push("Your cart is empty.".to_string());
        return;
    }
    for line in &cart.lines {
        lines.push(format!(
            "{:>3}  {:<28} {:>10} x {:<4} {:>10}",
            line.product_id,
            line.name,
            line.unit_price.display(),
            line.quantity,
            line.line_total.display()
        ));
    }
    lines.push(format!(
        "Total ({} item(s)): {}",
        cart.count,
        cart.total.display()
    ));
}

fn checkout_lines(cart: &CartView, checkout: &CheckoutView, lines: &mut Vec<String>) {
    lines.push(format!(
        "Order: {} item(s), {}",
        cart.count,
        cart.total.display()
    ));
    for field in CheckoutField::ALL {
        let value = match field {
            CheckoutField::CardNumber => checkout.form.masked_card_number(),
            CheckoutField::Cvv if !checkout.form.cvv.is_empty() => "***".to_string(),
            _ => checkout.form.get(field).to_string(),
        };
        let marker = if checkout.missing.contains(&field) { "*" } else { " " };
        lines.push(format!("{marker} {:<12} {value}", field.label()));
    }
    if checkout.ready {
        lines.push("Ready: type `pay` to place the order.".to_string());
    } else {
        lines.push("Fill in the fields marked * with `set <field> <value>`.".to_string());
    }
}
