//! Input handling for sanitext
//!
//! Reads the text to process and parses answers to interactive prompts.

use std::io::{self, BufRead, Read, Write};

use crate::engine::interactive::{DecisionRequest, Resolver};
use crate::error::{Result, SanitextError};
use crate::output::Decision;

/// A parsed prompt answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Keep,
    Remove,
    /// Replace, with the payload if it was given on the same line
    Replace(Option<String>),
}

/// Parse a prompt answer
///
/// Accepts `k`/`keep`, `r`/`remove` and `p`/`replace`, optionally followed
/// by a space and the replacement text.
pub fn parse_choice(line: &str) -> Option<Choice> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(' ') {
        Some((word, rest)) => (word, Some(rest)),
        None => (trimmed.trim_end(), None),
    };

    match word.to_lowercase().as_str() {
        "k" | "keep" if rest.map_or(true, |r| r.trim().is_empty()) => Some(Choice::Keep),
        "r" | "remove" if rest.map_or(true, |r| r.trim().is_empty()) => Some(Choice::Remove),
        "p" | "replace" => Some(Choice::Replace(rest.map(String::from))),
        _ => None,
    }
}

/// Prompts on a writer and reads answers from a reader
pub struct TerminalResolver<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalResolver<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Read one line without its terminator; `None` at end of input
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }

    fn prompt(&mut self, request: &DecisionRequest) {
        let _ = writeln!(
            self.writer,
            "Disallowed character: '{}' (U+{:04X}, {})",
            request.ch, request.code_point, request.name
        );
        let _ = write!(self.writer, "[k]eep, [r]emove, [p] <text> replace: ");
        let _ = self.writer.flush();
    }
}

impl TerminalResolver<io::StdinLock<'static>, io::Stderr> {
    /// Resolver reading stdin and prompting on stderr
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Resolver for TerminalResolver<R, W> {
    fn resolve(&mut self, request: &DecisionRequest) -> Option<Decision> {
        self.prompt(request);

        let Some(line) = self.read_line() else {
            // Nobody left to ask; keep the output inside the policy
            let _ = writeln!(self.writer, "\nWarning: no answer, removing '{}'", request.ch);
            return Some(Decision::Remove);
        };

        match parse_choice(&line) {
            Some(Choice::Keep) => Some(Decision::Keep),
            Some(Choice::Remove) => Some(Decision::Remove),
            Some(Choice::Replace(Some(payload))) => Some(Decision::Replace(payload)),
            Some(Choice::Replace(None)) => {
                let _ = write!(self.writer, "Replacement: ");
                let _ = self.writer.flush();
                Some(Decision::Replace(self.read_line().unwrap_or_default()))
            }
            None => {
                let _ = writeln!(self.writer, "Invalid choice '{}', try again.", line.trim());
                None
            }
        }
    }
}

/// Use the explicit text if given, otherwise read everything from `reader`
pub fn read_text_from<R: Read>(explicit: Option<String>, mut reader: R) -> Result<String> {
    let text = match explicit {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            reader.read_to_string(&mut buf)?;
            buf
        }
    };

    if text.is_empty() {
        return Err(SanitextError::EmptyInput);
    }
    Ok(text)
}

/// Use the explicit text if given, otherwise read stdin
pub fn read_text(explicit: Option<String>) -> Result<String> {
    read_text_from(explicit, io::stdin().lock())
}
