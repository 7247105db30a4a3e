//! Interactive prompt session
//!
//! Each input line is appended to an accumulating prompt and the current
//! suggestions are printed. A reset token clears the prompt and an exit
//! token (or end of input) ends the session.

use crate::index::corpus::{Corpus, LineSource};
use crate::output::print_suggestions;
use crate::query::completer::CompletionCoordinator;
use anyhow::Result;
use std::io::{BufRead, Write};
use termcolor::WriteColor;

/// Reserved inputs recognized by the session
#[derive(Debug, Clone)]
pub struct SessionTokens {
    pub reset: String,
    pub exit: String,
}

impl Default for SessionTokens {
    fn default() -> Self {
        Self {
            reset: "#".to_string(),
            exit: "exit".to_string(),
        }
    }
}

/// What a single line of input did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Reset,
    Exit,
    /// The prompt grew; holds the prompt as it now reads
    Extended(String),
}

/// Accumulated prompt state, separate from any I/O
#[derive(Debug, Default)]
pub struct PromptSession {
    tokens: SessionTokens,
    prompt: String,
}

impl PromptSession {
    pub fn new(tokens: SessionTokens) -> Self {
        Self {
            tokens,
            prompt: String::new(),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Apply one line of user input
    pub fn handle(&mut self, input: &str) -> SessionEvent {
        let trimmed = input.trim();
        if trimmed == self.tokens.reset {
            self.prompt.clear();
            SessionEvent::Reset
        } else if trimmed == self.tokens.exit {
            SessionEvent::Exit
        } else {
            self.prompt.push_str(input);
            self.prompt.push(' ');
            SessionEvent::Extended(self.prompt.clone())
        }
    }
}

/// Run an interactive session until the exit token or end of input
pub fn run_session<S, R, W>(
    coordinator: &CompletionCoordinator<S>,
    mut input: R,
    out: &mut W,
    tokens: SessionTokens,
) -> Result<()>
where
    S: Corpus + LineSource,
    R: BufRead,
    W: WriteColor,
{
    let mut session = PromptSession::new(tokens);
    let mut line = String::new();

    loop {
        write!(out, "\n{}", session.prompt())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let added = line.trim_end_matches(['\n', '\r']);

        match session.handle(added) {
            SessionEvent::Reset => {
                writeln!(out, "\nPrompt reset. Start typing a new prompt.")?;
            }
            SessionEvent::Exit => {
                writeln!(out, "Exit...")?;
                break;
            }
            SessionEvent::Extended(prompt) => {
                let prompt = prompt.trim();
                if prompt.is_empty() {
                    writeln!(out, "No prompt entered yet.")?;
                } else {
                    let suggestions = coordinator.get_suggestions(prompt);
                    print_suggestions(out, &suggestions)?;
                }
            }
        }
    }

    Ok(())
}
