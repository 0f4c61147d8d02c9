//! Character rules for sanitext
//!
//! Defines the confusable/invisible character table, the emoji registry and
//! the allowed-character policy set.

pub mod allowlist;
pub mod confusables;
pub mod emoji;

/// A known deceptive character and its plain replacement
#[derive(Debug, Clone, Copy)]
pub struct Confusable {
    /// The deceptive character
    pub ch: char,

    /// Plain text it stands in for; never empty
    pub replacement: &'static str,

    /// What the character imitates
    pub reason: &'static str,
}

impl Confusable {
    /// Create a new table entry
    pub const fn new(ch: char, replacement: &'static str, reason: &'static str) -> Self {
        Self {
            ch,
            replacement,
            reason,
        }
    }
}
