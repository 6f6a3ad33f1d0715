//! Interactive name prompt for new documents.
//!
//! 1. Asks for a base name on stderr, reads one line from stdin
//! 2. Validates the name against existing documents under the root
//! 3. Re-prompts on a collision, returns `Cancelled` on EOF or empty input

use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::Path;

/// Outcome of the name prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// User submitted a name that passed validation.
    Accepted(String),
    /// User dismissed the prompt (EOF or empty submission).
    Cancelled,
}

/// Check a candidate base name against the workspace root.
///
/// `None` means the name is usable; `Some` carries the inline error shown to
/// the user. Empty input is not an error here; it means cancellation and is
/// handled by the caller.
pub fn validate(candidate: &str, root: &Path) -> Option<String> {
    if crate::new::destination(root, candidate).exists() {
        return Some("the specified file already exists".to_string());
    }
    None
}

/// Ask for a file base name on the terminal.
pub fn ask(root: &Path) -> Result<Answer> {
    let stdin = std::io::stdin();
    ask_from(root, &mut stdin.lock(), &mut std::io::stderr())
}

/// Core of `ask` with injected streams.
pub fn ask_from(root: &Path, input: &mut impl BufRead, out: &mut impl Write) -> Result<Answer> {
    loop {
        write!(out, "Enter name for file: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Answer::Cancelled);
        }
        let name = line.trim();
        if name.is_empty() {
            return Ok(Answer::Cancelled);
        }

        match validate(name, root) {
            Some(message) => writeln!(out, "{message}")?,
            None => return Ok(Answer::Accepted(name.to_string())),
        }
    }
}
