//! Anomaly detection
//!
//! Scans text for known homoglyphs and invisible characters, or for any
//! character outside an allowed set. Records follow text order and are not
//! deduplicated.

use crate::output::Anomaly;
use crate::rules::allowlist::AllowedSet;
use crate::rules::confusables;

/// Name used when the Unicode registry has none
pub const UNKNOWN_NAME: &str = "Unknown";

/// Unicode name of a character, or "Unknown"
pub fn display_name(ch: char) -> String {
    unicode_names2::name(ch)
        .map(|name| name.to_string())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

/// One record per occurrence of a confusable or invisible character
pub fn detect_known_anomalies(text: &str) -> Vec<Anomaly> {
    scan(text, confusables::is_known_anomaly)
}

/// One record per occurrence of a character not in `allowed`
pub fn detect_outside_policy(text: &str, allowed: &AllowedSet) -> Vec<Anomaly> {
    scan(text, |ch| !allowed.contains(ch))
}

fn scan(text: &str, flagged: impl Fn(char) -> bool) -> Vec<Anomaly> {
    text.chars()
        .filter(|&ch| flagged(ch))
        .map(|ch| Anomaly::new(ch, display_name(ch)))
        .collect()
}
