//! Deterministic replacement for disallowed characters
//!
//! Tries the character's NFKC form first, then the ASCII members of its
//! compatibility decomposition, then gives up with an empty string.

use unicode_normalization::char::decompose_compatible;
use unicode_normalization::UnicodeNormalization;

use crate::rules::allowlist::AllowedSet;

/// Closest replacement for `ch` made only of characters in `allowed`
pub fn resolve_fallback(ch: char, allowed: &AllowedSet) -> String {
    let normalized: String = std::iter::once(ch).nfkc().collect();
    if allowed.contains_all(&normalized) {
        return normalized;
    }

    ascii_components(ch, allowed)
}

/// Allowed ASCII code points of the full compatibility decomposition, in order
fn ascii_components(ch: char, allowed: &AllowedSet) -> String {
    let mut out = String::new();
    decompose_compatible(ch, |part| {
        if part.is_ascii() && allowed.contains(part) {
            out.push(part);
        }
    });
    out
}
