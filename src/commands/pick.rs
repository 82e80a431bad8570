//! Pick command - run a label picker session
//!
//! With `--keys` the session is driven by a key script and the outcome is
//! printed once. Without it the picker takes over the terminal until the
//! user confirms or cancels.

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::{cursor, execute, queue, terminal};
use std::io::{self, IsTerminal, Write};

use crate::PickerError;
use crate::history::{Dispatch, PickerSession, SessionOptions};
use crate::keybinds::{KeyMap, PickerAction, parse_key_script};
use crate::label::LabelCatalog;
use crate::output;
use crate::present::{assigned_view, catalog_view};
use crate::selection::SelectionState;

type Result<T> = std::result::Result<T, PickerError>;

/// How a picker session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Confirmed with this selection
    Confirmed(SelectionState),
    Cancelled,
    /// The key script ended before confirm or cancel
    Open(SelectionState),
}

/// Execute the pick command
///
/// # Errors
/// Returns an error if the key script is invalid or the terminal cannot be used.
pub fn execute(
    catalog: &LabelCatalog,
    initial: &[String],
    keys: Option<&str>,
    keymap: &KeyMap,
    options: SessionOptions,
    quiet: bool,
) -> Result<()> {
    let outcome = match keys {
        Some(script) => run_script(catalog, initial, script, keymap, options)?,
        None => run_interactive(catalog, initial, keymap, options)?,
    };

    report(&outcome, catalog, quiet);
    Ok(())
}

/// Drive a session with a key script
///
/// # Errors
/// Returns an error if the script cannot be parsed.
pub fn run_script(
    catalog: &LabelCatalog,
    initial: &[String],
    script: &str,
    keymap: &KeyMap,
    options: SessionOptions,
) -> Result<Outcome> {
    let keys = parse_key_script(script)?;
    let mut session = PickerSession::with_options(catalog, initial.iter().cloned(), options);

    for key in &keys {
        let Some(event) = keymap.resolve(key) else {
            tracing::debug!(?key, "unbound key ignored");
            continue;
        };
        if let Some(outcome) = outcome_of(&mut session, event) {
            return Ok(outcome);
        }
    }

    Ok(Outcome::Open(session.state().clone()))
}

fn outcome_of(session: &mut PickerSession<'_>, event: crate::history::PickerEvent) -> Option<Outcome> {
    // Snapshot before dispatching: a confirmed session keeps no state to borrow
    let before = session.state().clone();
    match session.dispatch(event) {
        Dispatch::Updated(_) | Dispatch::Ignored => None,
        Dispatch::Confirmed(_) => Some(Outcome::Confirmed(before)),
        Dispatch::Cancelled => Some(Outcome::Cancelled),
    }
}

/// Restores the terminal when dropped
struct RawTerminal;

impl RawTerminal {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stderr(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        let _ = execute!(io::stderr(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn run_interactive(
    catalog: &LabelCatalog,
    initial: &[String],
    keymap: &KeyMap,
    options: SessionOptions,
) -> Result<Outcome> {
    if !io::stdin().is_terminal() {
        return Err(PickerError::InvalidInput(
            "Not a terminal. Use --keys <SCRIPT> to pick non-interactively.".into(),
        ));
    }

    let mut session = PickerSession::with_options(catalog, initial.iter().cloned(), options);
    let _guard = RawTerminal::enter()?;
    let mut err = io::stderr();

    loop {
        draw(&mut err, &session, keymap)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(event) = keymap.resolve(&key) else {
            continue;
        };
        if let Some(outcome) = outcome_of(&mut session, event) {
            return Ok(outcome);
        }
    }
}

fn draw(out: &mut impl Write, session: &PickerSession<'_>, keymap: &KeyMap) -> Result<()> {
    let catalog = session.catalog();
    let state = session.state();

    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    let mut lines = vec![format!("> {}", session.text()), String::new()];
    lines.push(output::label_pane(&assigned_view(state, catalog), false));
    lines.push("─".repeat(40));
    lines.push(output::label_pane(&catalog_view(state, catalog), false));
    lines.push(String::new());
    lines.push(hint_line(keymap));

    // Raw mode does not translate '\n'
    let screen = lines.join("\n").replace('\n', "\r\n");
    write!(out, "{screen}")?;
    out.flush()?;
    Ok(())
}

fn hint_line(keymap: &KeyMap) -> String {
    PickerAction::ALL
        .into_iter()
        .filter_map(|action| {
            let keys = keymap.keys_for(action);
            (!keys.is_empty()).then(|| format!("{} {}", keys.join("/"), action.name()))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn report(outcome: &Outcome, catalog: &LabelCatalog, quiet: bool) {
    match outcome {
        Outcome::Confirmed(state) => {
            let diff = state.diff();
            if !quiet {
                if diff.is_empty() {
                    println!("No label changes.");
                } else {
                    println!("Label changes:");
                }
            }
            for line in output::diff_lines(&diff, quiet) {
                println!("{line}");
            }
            if !quiet {
                println!(
                    "Labels: {}",
                    output::label_list(&state.effective_selection(), false)
                );
            }
        }
        Outcome::Cancelled => {
            if !quiet {
                eprintln!("Cancelled, labels unchanged.");
            }
        }
        Outcome::Open(state) => {
            if quiet {
                println!("{}", output::label_list(&state.effective_selection(), true));
            } else {
                println!("{}", output::label_pane(&assigned_view(state, catalog), false));
                println!("{}", "─".repeat(40));
                println!("{}", output::label_pane(&catalog_view(state, catalog), false));
            }
        }
    }
}
