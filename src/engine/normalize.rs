//! Policy-independent normalization
//!
//! Confusable substitution, then invisible-character removal, then NFKC.

use unicode_normalization::UnicodeNormalization;

use crate::rules::confusables;

/// Rewrite text into its canonical display form
pub fn normalize(text: &str) -> String {
    let substituted = confusables::substitute(text);
    let visible = confusables::strip_invisible(&substituted);
    visible.nfkc().collect()
}
