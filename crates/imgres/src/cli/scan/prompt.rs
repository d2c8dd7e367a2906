//! The yes/no question asked before exporting.

use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};

use crate::cli::theme;

/// `y` or `yes`, ignoring case and surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Ask whether to create the report file.
///
/// On a terminal this is a themed prompt; otherwise one line is read from
/// stdin. End of input, Ctrl+C and an answer that cannot be read all count
/// as "no".
pub fn confirm_export(label: &str) -> bool {
    let question = format!("Create {} report? (y/n)", label);

    if io::stdin().is_terminal() {
        let answer = Input::<String>::with_theme(&theme::imgres_theme())
            .with_prompt(question)
            .allow_empty(true)
            .interact_text();
        return match handle_interrupt(answer) {
            Ok(answer) => answer.as_deref().is_some_and(is_affirmative),
            Err(e) => {
                tracing::warn!("Could not read answer, skipping export: {}", e);
                false
            }
        };
    }

    print!("\n{}: ", question);
    if let Err(e) = io::stdout().flush() {
        tracing::debug!("Failed to flush prompt: {}", e);
    }
    read_answer(io::stdin().lock())
}

/// Read one answer line. End of input and read errors are "no".
fn read_answer<R: BufRead>(mut input: R) -> bool {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(read) => read > 0 && is_affirmative(&line),
        Err(e) => {
            tracing::warn!("Could not read answer, skipping export: {}", e);
            false
        }
    }
}

/// Map a dialoguer interrupt (Ctrl+C / terminal disconnect) to `Ok(None)`.
fn handle_interrupt<T>(result: dialoguer::Result<T>) -> dialoguer::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e),
    }
}
