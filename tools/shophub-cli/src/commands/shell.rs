//! Interactive storefront session.

use std::io::BufRead;

use anyhow::{Context as _, Result};
use dialoguer::Input;
use shophub_commerce::session::{Action, Password, Session};

use crate::context::Context;
use crate::output::Output;
use crate::parse::{parse_line, Command, HELP};
use crate::render::render;

/// What the loop should do after a line.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Run the shell command.
pub fn run(ctx: &Context) -> Result<()> {
    let mut session = ctx.new_session()?;
    let out = &ctx.output;
    let interactive = out.is_interactive() && !out.is_json();

    render(&session.view(), out);
    if interactive {
        out.info("Type `help` for commands, `quit` to leave.");
        loop {
            let prompt = format!("shophub:{}", session.page());
            let line: String = Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .context("Failed to read input")?;
            if handle_line(&line, &mut session, out, true)? == Flow::Quit {
                break;
            }
        }
    } else {
        for line in std::io::stdin().lock().lines() {
            let line = line.context("Failed to read stdin")?;
            if handle_line(&line, &mut session, out, false)? == Flow::Quit {
                break;
            }
        }
    }

    tracing::debug!(page = %session.page(), items = session.cart().count(), "shell closed");
    Ok(())
}

fn handle_line(line: &str, session: &mut Session, out: &Output, interactive: bool) -> Result<Flow> {
    let command = match parse_line(line) {
        Ok(Some(command)) => command,
        Ok(None) => return Ok(Flow::Continue),
        Err(e) => {
            out.warn(&e.to_string());
            return Ok(Flow::Continue);
        }
    };

    match command {
        Command::Quit => return Ok(Flow::Quit),
        Command::Help => {
            for help in HELP.lines() {
                out.line(help);
            }
        }
        Command::Show => render(&session.view(), out),
        Command::Apply(action) => {
            let action = if interactive {
                prompt_password(action)?
            } else {
                action
            };
            let name = action.name();
            match session.apply(action) {
                Ok(_) => render(&session.view(), out),
                Err(e) => out.warn(&format!("{name} refused: {e}")),
            }
        }
    }

    Ok(Flow::Continue)
}

/// Ask for the password when `login <email>` was typed without one.
fn prompt_password(action: Action) -> Result<Action> {
    match action {
        Action::Login { email, password } if !email.is_empty() && password.is_empty() => {
            let password: String = dialoguer::Password::new()
                .with_prompt("Password")
                .allow_empty_password(true)
                .interact()
                .context("Failed to read password")?;
            Ok(Action::Login {
                email,
                password: Password::new(password),
            })
        }
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shophub_commerce::prelude::*;
    use std::sync::Arc;

    fn drive(lines: &[&str]) -> (Session, Vec<Flow>) {
        let mut session = Session::new(Arc::new(Catalog::builtin()));
        let out = Output::new(false, true);
        let flows = lines
            .iter()
            .map(|line| handle_line(line, &mut session, &out, false).unwrap())
            .collect();
        (session, flows)
    }

    #[test]
    fn test_refusals_and_typos_keep_going() {
        let (session, flows) = drive(&["cart", "dance", "login a@b.com x", "add 3"]);
        assert!(flows.iter().all(|f| *f == Flow::Continue));
        assert_eq!(session.page(), Page::Browsing);
        assert_eq!(session.cart().count(), 1);
    }

    #[test]
    fn test_quit_stops() {
        let (_, flows) = drive(&["help", "quit"]);
        assert_eq!(flows, vec![Flow::Continue, Flow::Quit]);
    }
}
