//! Apply a script of actions to a fresh session.

use anyhow::{anyhow, bail, Context as _, Result};
use shophub_commerce::error::SessionError;
use shophub_commerce::session::{Session, SessionView};

use super::RunArgs;
use crate::context::Context;
use crate::parse::{parse_line, Command};
use crate::render::render;

/// An action the session refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refusal {
    /// 1-based script line.
    pub line: usize,
    pub action: &'static str,
    pub error: SessionError,
}

/// Outcome of a script.
#[derive(Debug, Default)]
pub struct ScriptReport {
    /// Actions the session accepted.
    pub applied: usize,
    pub refused: Vec<Refusal>,
}

/// Run the run command.
pub fn run(args: RunArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.script);
    let source = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read script: {}", path.display()))?;

    ctx.output.debug(&format!("Running script: {}", path.display()));
    let mut session = ctx.new_session()?;
    let report = run_script(&source, &mut session, args.strict, |view| {
        render(view, &ctx.output)
    })
    .with_context(|| format!("Script failed: {}", path.display()))?;

    render(&session.view(), &ctx.output);

    for refusal in &report.refused {
        ctx.output.warn(&format!(
            "line {}: {} refused: {}",
            refusal.line, refusal.action, refusal.error
        ));
    }
    ctx.output.success(&format!(
        "Applied {} action(s), {} refused",
        report.applied,
        report.refused.len()
    ));

    Ok(())
}

/// Apply every action in `source` to `session`.
///
/// Unparseable lines always fail the script. Refused actions are collected,
/// or fail the script when `strict` is set. `on_show` is called for each
/// `show` line.
pub fn run_script(
    source: &str,
    session: &mut Session,
    strict: bool,
    mut on_show: impl FnMut(&SessionView),
) -> Result<ScriptReport> {
    let mut report = ScriptReport::default();

    for (index, text) in source.lines().enumerate() {
        let line = index + 1;
        let command = parse_line(text).map_err(|e| anyhow!("line {line}: {e}"))?;

        match command {
            None | Some(Command::Help) => {}
            Some(Command::Show) => on_show(&session.view()),
            Some(Command::Quit) => bail!("line {line}: `quit` is only available in the shell"),
            Some(Command::Apply(action)) => {
                let name = action.name();
                match session.apply(action) {
                    Ok(page) => {
                        tracing::debug!(line, action = name, %page, "applied");
                        report.applied += 1;
                    }
                    Err(error) if strict => {
                        bail!("line {line}: {name} refused: {error}");
                    }
                    Err(error) => report.refused.push(Refusal {
                        line,
                        action: name,
                        error,
                    }),
                }
            }
        }
    }

    Ok(report)
}
