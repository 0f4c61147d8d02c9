//! Output types for sanitext
//!
//! Detection records, interactive decisions and the per-run report printed
//! by the command line tool.

use serde::Serialize;

/// A flagged character and its Unicode name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Anomaly {
    /// The flagged character
    pub character: char,

    /// Unicode name, or "Unknown" when the character has none
    pub name: String,
}

impl Anomaly {
    /// Create a new record
    pub fn new(character: char, name: impl Into<String>) -> Self {
        Self {
            character,
            name: name.into(),
        }
    }

    /// Scalar value of the character
    pub fn code_point(&self) -> u32 {
        self.character as u32
    }
}

/// Resolution of one disallowed character in interactive mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Keep the character as is
    Keep,

    /// Drop the character
    Remove,

    /// Substitute the given text, which is not checked against the policy
    Replace(String),
}

impl Decision {
    /// Create a replace decision
    pub fn replace(payload: impl Into<String>) -> Self {
        Decision::Replace(payload.into())
    }

    /// Text that stands in for `ch` under this decision
    pub fn replacement(&self, ch: char) -> String {
        match self {
            Decision::Keep => ch.to_string(),
            Decision::Remove => String::new(),
            Decision::Replace(payload) => payload.clone(),
        }
    }
}

/// How a report was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    Deterministic,
    Interactive,
    Detect,
    Normalize,
}

/// Result of one run over an input text
#[derive(Debug, Clone, Serialize)]
pub struct SanitizeReport {
    /// How the output was produced
    pub mode: ReportMode,

    /// Original text
    pub input: String,

    /// Known homoglyphs and invisible characters, one per occurrence
    pub known: Vec<Anomaly>,

    /// Characters outside the allowed set, one per occurrence
    pub disallowed: Vec<Anomaly>,

    /// Rewritten text; absent for detection-only runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Whether the output differs from the input
    pub changed: bool,
}

impl SanitizeReport {
    /// Number of distinct disallowed characters
    pub fn distinct_disallowed(&self) -> usize {
        let mut chars: Vec<char> = self.disallowed.iter().map(|a| a.character).collect();
        chars.sort_unstable();
        chars.dedup();
        chars.len()
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Render records as a list of (character, name) pairs
pub fn format_detected(anomalies: &[Anomaly]) -> String {
    let items: Vec<String> = anomalies
        .iter()
        .map(|a| format!("('{}', U+{:04X}, '{}')", a.character, a.code_point(), a.name))
        .collect();
    format!("[{}]", items.join(", "))
}
