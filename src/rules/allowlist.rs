//! Allowed-character policy set
//!
//! Built once from a [`PolicyConfig`] and passed explicitly to every
//! detection and sanitize call.

use std::collections::HashSet;
use std::path::Path;

use crate::config::{BasePolicy, PolicyConfig};
use crate::error::{Result, SanitextError};
use crate::rules::emoji;

/// Printable ASCII: digits, letters, punctuation and whitespace
pub const ASCII_PRINTABLE: &str = concat!(
    "0123456789",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
    " \t\n\r\x0b\x0c",
);

/// Immutable set of allowed characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedSet {
    /// Every scalar value is allowed
    universal: bool,

    /// Emoji registry is allowed
    emoji: bool,

    /// Explicitly allowed characters
    chars: HashSet<char>,

    /// Characters carved out of an otherwise allowed set
    excluded: HashSet<char>,
}

impl AllowedSet {
    /// The printable ASCII set
    pub fn ascii_printable() -> Self {
        Self::from_chars(ASCII_PRINTABLE.chars())
    }

    /// The full Unicode scalar range
    pub fn full_unicode() -> Self {
        Self {
            universal: true,
            emoji: false,
            chars: HashSet::new(),
            excluded: HashSet::new(),
        }
    }

    /// A set of exactly the given characters
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            universal: false,
            emoji: false,
            chars: chars.into_iter().collect(),
            excluded: HashSet::new(),
        }
    }

    /// Build a set from a policy and already-loaded extra file content
    pub fn build(policy: &PolicyConfig, extra_file_content: Option<&str>) -> Self {
        let mut set = match policy.base {
            BasePolicy::AsciiPrintable => Self::ascii_printable(),
            BasePolicy::FullUnicode => Self::full_unicode(),
        };

        set.chars.extend(policy.extra_chars.chars());
        set.emoji = policy.allow_emoji;

        if let Some(content) = extra_file_content {
            set.chars.extend(content.chars());
        }

        set
    }

    /// Build a set from a policy, reading its extra file if configured
    pub fn from_policy(policy: &PolicyConfig) -> Result<Self> {
        let content = match policy.extra_file_path() {
            Some(path) => Some(load_extra_file(&path)?),
            None => None,
        };
        Ok(Self::build(policy, content.as_deref()))
    }

    /// Check if a character is allowed
    pub fn contains(&self, ch: char) -> bool {
        if self.excluded.contains(&ch) {
            return false;
        }
        self.universal || self.chars.contains(&ch) || (self.emoji && emoji::is_emoji(ch))
    }

    /// Check if every character of a string is allowed
    pub fn contains_all(&self, text: &str) -> bool {
        text.chars().all(|c| self.contains(c))
    }

    /// A copy of this set with one character removed
    pub fn without(&self, ch: char) -> Self {
        let mut set = self.clone();
        set.chars.remove(&ch);
        if set.universal || set.emoji {
            set.excluded.insert(ch);
        }
        set
    }

    /// Check if this set covers every scalar value
    pub fn is_universal(&self) -> bool {
        self.universal && self.excluded.is_empty()
    }
}

impl Default for AllowedSet {
    fn default() -> Self {
        Self::ascii_printable()
    }
}

/// Read the characters of an extra allowed-characters file
///
/// Invalid UTF-8 is replaced rather than rejected. A missing or unreadable
/// path is a configuration error.
pub fn load_extra_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| SanitextError::ExtraFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
