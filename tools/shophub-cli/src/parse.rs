//! Line grammar for `shell` and `run`.

use shophub_commerce::checkout::{CheckoutField, UnknownField};
use shophub_commerce::ids::ProductId;
use shophub_commerce::session::{Action, Password};
use thiserror::Error;

/// Help text listing every accepted line.
pub const HELP: &str = "\
login <email> <password>   sign in
logout                     sign out and empty the cart
products                   show the product list
cart                       show the cart
checkout                   open checkout (from the cart)
pay                        submit the checkout form
continue                   back to products after an order
menu                       toggle the navigation menu
category <name>            filter products (\"All\" for everything)
add <id>                   add a product to the cart
qty <id> <delta>           change a line's quantity by delta
inc <id> / dec <id>        change a line's quantity by one
remove <id>                drop a line from the cart
set <field> <value>        fill a checkout field
show                       render the current page
help                       this text
quit                       leave the shell";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send an action into the session.
    Apply(Action),
    /// Render the current page again.
    Show,
    Help,
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("invalid product id `{0}`")]
    InvalidId(String),

    #[error("invalid quantity change `{0}`")]
    InvalidDelta(String),

    #[error(transparent)]
    UnknownField(#[from] UnknownField),
}

/// Parse one line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = split_word(line);
    let command = match word.to_lowercase().as_str() {
        "login" => {
            // Missing credentials parse as empty and are refused by the session.
            // The password is the rest of the line, spaces included.
            let (email, password) = split_word(rest);
            apply(Action::Login {
                email: email.to_string(),
                password: Password::new(password),
            })
        }
        "logout" => apply(Action::Logout),
        "products" => apply(Action::ShowProducts),
        "cart" => apply(Action::ShowCart),
        "checkout" => apply(Action::ProceedToCheckout),
        "pay" => apply(Action::SubmitPayment),
        "continue" => apply(Action::ContinueShopping),
        "menu" => apply(Action::ToggleNav),
        "category" => {
            if rest.is_empty() {
                return Err(ParseError::Usage("category <name>"));
            }
            apply(Action::SelectCategory(rest.to_string()))
        }
        "add" => apply(Action::AddToCart(product_id(rest, "add <id>")?)),
        "remove" => apply(Action::RemoveFromCart(product_id(rest, "remove <id>")?)),
        "inc" => apply(Action::UpdateQuantity {
            product_id: product_id(rest, "inc <id>")?,
            delta: 1,
        }),
        "dec" => apply(Action::UpdateQuantity {
            product_id: product_id(rest, "dec <id>")?,
            delta: -1,
        }),
        "qty" => {
            let (id, delta) = split_word(rest);
            if delta.is_empty() {
                return Err(ParseError::Usage("qty <id> <delta>"));
            }
            let product_id = product_id(id, "qty <id> <delta>")?;
            let delta = delta
                .trim_start_matches('+')
                .parse()
                .map_err(|_| ParseError::InvalidDelta(delta.to_string()))?;
            apply(Action::UpdateQuantity { product_id, delta })
        }
        "set" => {
            let (field, value) = split_word(rest);
            if field.is_empty() {
                return Err(ParseError::Usage("set <field> <value>"));
            }
            let field: CheckoutField = field.parse()?;
            apply(Action::UpdateCheckoutField {
                field,
                value: value.to_string(),
            })
        }
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(ParseError::UnknownCommand(word.to_string())),
    };

    Ok(Some(command))
}

fn apply(action: Action) -> Command {
    Command::Apply(action)
}

fn product_id(arg: &str, usage: &'static str) -> Result<ProductId, ParseError> {
    let (id, extra) = split_word(arg);
    if id.is_empty() || !extra.is_empty() {
        return Err(ParseError::Usage(usage));
    }
    id.parse().map_err(|_| ParseError::InvalidId(id.to_string()))
}

/// Split off the first whitespace-separated word; the rest is trimmed.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(line: &str) -> Action {
        match parse_line(line) {
            Ok(Some(Command::Apply(action))) => action,
            other => panic!("{line}: {other:?}"),
        }
    }

    #[test]
    fn test_blank_and_comments() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# add 1"), Ok(None));
    }

    #[test]
    fn test_login() {
        assert_eq!(
            action("login a@b.com x"),
            Action::Login {
                email: "a@b.com".to_string(),
                password: "x".into(),
            }
        );
        assert_eq!(
            action("login a@b.com correct horse  battery"),
            Action::Login {
                email: "a@b.com".to_string(),
                password: "correct horse  battery".into(),
            }
        );
        assert_eq!(
            action("LOGIN"),
            Action::Login {
                email: String::new(),
                password: "".into(),
            }
        );
    }

    #[test]
    fn test_navigation_words() {
        assert_eq!(action("logout"), Action::Logout);
        assert_eq!(action("products"), Action::ShowProducts);
        assert_eq!(action("cart"), Action::ShowCart);
        assert_eq!(action("checkout"), Action::ProceedToCheckout);
        assert_eq!(action("pay"), Action::SubmitPayment);
        assert_eq!(action("continue"), Action::ContinueShopping);
        assert_eq!(action("menu"), Action::ToggleNav);
    }

    #[test]
    fn test_category_keeps_spaces() {
        assert_eq!(
            action("category  Home Office "),
            Action::SelectCategory("Home Office".to_string())
        );
        assert_eq!(
            parse_line("category"),
            Err(ParseError::Usage("category <name>"))
        );
    }

    #[test]
    fn test_cart_lines() {
        let id = ProductId::new(4);
        assert_eq!(action("add 4"), Action::AddToCart(id));
        assert_eq!(action("remove 4"), Action::RemoveFromCart(id));
        assert_eq!(
            action("inc 4"),
            Action::UpdateQuantity { product_id: id, delta: 1 }
        );
        assert_eq!(
            action("dec 4"),
            Action::UpdateQuantity { product_id: id, delta: -1 }
        );
        assert_eq!(
            action("qty 4 -5"),
            Action::UpdateQuantity { product_id: id, delta: -5 }
        );
        assert_eq!(
            action("qty 4 +2"),
            Action::UpdateQuantity { product_id: id, delta: 2 }
        );
    }

    #[test]
    fn test_cart_errors() {
        assert_eq!(parse_line("add"), Err(ParseError::Usage("add <id>")));
        assert_eq!(parse_line("add 1 2"), Err(ParseError::Usage("add <id>")));
        assert_eq!(
            parse_line("add one"),
            Err(ParseError::InvalidId("one".to_string()))
        );
        assert_eq!(
            parse_line("qty 1"),
            Err(ParseError::Usage("qty <id> <delta>"))
        );
        assert_eq!(
            parse_line("qty 1 lots"),
            Err(ParseError::InvalidDelta("lots".to_string()))
        );
    }

    #[test]
    fn test_set_field() {
        assert_eq!(
            action("set fullName Ada Lovelace"),
            Action::UpdateCheckoutField {
                field: CheckoutField::FullName,
                value: "Ada Lovelace".to_string(),
            }
        );
        assert_eq!(
            action("set zip_code"),
            Action::UpdateCheckoutField {
                field: CheckoutField::ZipCode,
                value: String::new(),
            }
        );
        assert_eq!(
            parse_line("set phone 555"),
            Err(ParseError::UnknownField(UnknownField("phone".to_string())))
        );
    }

    #[test]
    fn test_shell_words() {
        assert_eq!(parse_line("show"), Ok(Some(Command::Show)));
        assert_eq!(parse_line("help"), Ok(Some(Command::Help)));
        assert_eq!(parse_line("quit"), Ok(Some(Command::Quit)));
        assert_eq!(
            parse_line("dance"),
            Err(ParseError::UnknownCommand("dance".to_string()))
        );
    }
}
