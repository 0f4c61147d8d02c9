//! Sanitize engine for sanitext
//!
//! Resolves every disallowed character to a replacement, either through the
//! deterministic decomposition fallback or through cached interactive
//! decisions, and rebuilds the text in its original order.

pub mod detect;
pub mod fallback;
pub mod interactive;
pub mod normalize;

use std::collections::{BTreeSet, HashMap};

use crate::output::{Anomaly, ReportMode, SanitizeReport};
use crate::rules::allowlist::AllowedSet;

use interactive::{DecisionCache, Resolver};

/// How disallowed characters are resolved
pub enum Mode<'r> {
    /// NFKC and decomposition fallback, dropping what cannot be mapped
    Deterministic,

    /// Ask the resolver once per distinct character
    Interactive(&'r mut dyn Resolver),
}

impl Mode<'_> {
    fn report_mode(&self) -> ReportMode {
        match self {
            Mode::Deterministic => ReportMode::Deterministic,
            Mode::Interactive(_) => ReportMode::Interactive,
        }
    }
}

/// Distinct characters of `text` outside `allowed`, ordered by code point
pub fn disallowed_chars(text: &str, allowed: &AllowedSet) -> BTreeSet<char> {
    text.chars().filter(|&ch| !allowed.contains(ch)).collect()
}

/// Rewrite `text` so that disallowed characters are resolved per `mode`
///
/// Text made only of allowed characters is returned unchanged.
pub fn sanitize(text: &str, allowed: &AllowedSet, mode: Mode<'_>) -> String {
    let disallowed = disallowed_chars(text, allowed);
    if disallowed.is_empty() {
        return text.to_string();
    }

    let replacements: HashMap<char, String> = match mode {
        Mode::Deterministic => disallowed
            .iter()
            .map(|&ch| (ch, fallback::resolve_fallback(ch, allowed)))
            .collect(),
        Mode::Interactive(resolver) => {
            let mut cache = DecisionCache::new();
            for &ch in &disallowed {
                cache.decide(ch, resolver);
            }
            cache.into_replacements()
        }
    };

    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if allowed.contains(ch) {
            out.push(ch);
        } else if let Some(replacement) = replacements.get(&ch) {
            out.push_str(replacement);
        }
    }
    out
}

/// Sanitizer bound to one allowed set
pub struct SanitizeEngine {
    allowed: AllowedSet,
}

impl SanitizeEngine {
    /// Create a new engine for the given allowed set
    pub fn new(allowed: AllowedSet) -> Self {
        Self { allowed }
    }

    /// Sanitize deterministically
    pub fn sanitize(&self, text: &str) -> String {
        sanitize(text, &self.allowed, Mode::Deterministic)
    }

    /// Sanitize asking `resolver` about each distinct disallowed character
    pub fn sanitize_with(&self, text: &str, resolver: &mut dyn Resolver) -> String {
        sanitize(text, &self.allowed, Mode::Interactive(resolver))
    }

    /// Characters outside the allowed set, one record per occurrence
    pub fn detect(&self, text: &str) -> Vec<Anomaly> {
        detect::detect_outside_policy(text, &self.allowed)
    }

    /// Known homoglyphs and invisible characters, one record per occurrence
    pub fn detect_known(&self, text: &str) -> Vec<Anomaly> {
        detect::detect_known_anomalies(text)
    }

    /// Detection report without rewriting
    pub fn detect_report(&self, text: &str) -> SanitizeReport {
        SanitizeReport {
            mode: ReportMode::Detect,
            input: text.to_string(),
            known: self.detect_known(text),
            disallowed: self.detect(text),
            output: None,
            changed: false,
        }
    }

    /// Sanitize and report what was found in the original text
    pub fn report(&self, text: &str, mode: Mode<'_>) -> SanitizeReport {
        let report_mode = mode.report_mode();
        let known = self.detect_known(text);
        let disallowed = self.detect(text);
        let output = sanitize(text, &self.allowed, mode);

        SanitizeReport {
            mode: report_mode,
            input: text.to_string(),
            known,
            disallowed,
            changed: output != text,
            output: Some(output),
        }
    }

    /// Policy-independent normalization report
    pub fn normalize_report(&self, text: &str) -> SanitizeReport {
        let output = normalize::normalize(text);

        SanitizeReport {
            mode: ReportMode::Normalize,
            input: text.to_string(),
            known: self.detect_known(text),
            disallowed: self.detect(text),
            changed: output != text,
            output: Some(output),
        }
    }

    /// Get the allowed set
    pub fn allowed(&self) -> &AllowedSet {
        &self.allowed
    }
}
