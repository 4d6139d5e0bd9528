use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal,
};
use log::{debug, warn};
use std::io::{self, IsTerminal, Write};
use std::iter;
use tokio_util::sync::CancellationToken;

/// Returns the password to log in with, or `None` when the user closed the prompt
/// (Ctrl-D or Ctrl-C) or the run was interrupted before login.
///
/// A password given on the command line or through `PVE_PASSWORD` is used as is.
/// Otherwise the user is prompted, provided stdin is a terminal. The prompt reads
/// keys with the terminal in raw mode, so Ctrl-C and Ctrl-D arrive as keys rather
/// than as a signal or end-of-file, and the terminal is restored on every path.
pub fn resolve_password(
    given: &str,
    cancel: &CancellationToken,
) -> anyhow::Result<Option<String>> {
    let password = if needs_prompt(given, io::stdin().is_terminal()) {
        prompt("Enter Password: ")?
    } else {
        Some(given.to_string())
    };

    if cancel.is_cancelled() {
        debug!("interrupted before login");
        return Ok(None);
    }
    if password.is_none() {
        debug!("password prompt closed");
    }
    Ok(password)
}

fn needs_prompt(given: &str, interactive: bool) -> bool {
    given.is_empty() && interactive
}

fn prompt(message: &str) -> io::Result<Option<String>> {
    let mut stderr = io::stderr();
    write!(stderr, "{}", message)?;
    stderr.flush()?;

    let password = {
        let _raw = RawMode::enable()?;
        read_password(iter::from_fn(|| Some(event::read())))
    };
    writeln!(stderr)?;
    password
}

/// Keeps the terminal in raw mode until dropped.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("unable to restore terminal: {}", e);
        }
    }
}

/// Collects typed characters until Enter. Ctrl-C, Ctrl-D or the end of the event
/// stream abort the prompt.
fn read_password<I>(events: I) -> io::Result<Option<String>>
where
    I: IntoIterator<Item = io::Result<Event>>,
{
    let mut password = String::new();
    for event in events {
        let Event::Key(key) = event? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Enter => return Ok(Some(password)),
            KeyCode::Char('c' | 'd') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(None);
            }
            KeyCode::Char(c) => password.push(c),
            KeyCode::Backspace => {
                password.pop();
            }
            _ => {}
        }
    }
    Ok(None)
}
