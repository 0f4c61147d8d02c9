//! Confusable and invisible character table
//!
//! Homoglyphs that impersonate ASCII, typographic punctuation, Unicode
//! spaces and the invisible characters treated as noise.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::rules::Confusable;

/// Letters from other scripts that render like Latin letters
pub const HOMOGLYPHS: &[Confusable] = &[
    // Cyrillic lowercase
    Confusable::new('\u{0430}', "a", "Cyrillic a"),
    Confusable::new('\u{0435}', "e", "Cyrillic ie"),
    Confusable::new('\u{043E}', "o", "Cyrillic o"),
    Confusable::new('\u{0441}', "c", "Cyrillic es"),
    Confusable::new('\u{0440}', "p", "Cyrillic er"),
    Confusable::new('\u{0445}', "x", "Cyrillic ha"),
    Confusable::new('\u{0456}', "i", "Cyrillic Byelorussian-Ukrainian i"),
    Confusable::new('\u{0458}', "j", "Cyrillic je"),
    Confusable::new('\u{0455}', "s", "Cyrillic dze"),
    Confusable::new('\u{0443}', "y", "Cyrillic u"),
    Confusable::new('\u{0501}', "d", "Cyrillic Komi de"),
    // Cyrillic uppercase
    Confusable::new('\u{0410}', "A", "Cyrillic capital a"),
    Confusable::new('\u{0412}', "B", "Cyrillic capital ve"),
    Confusable::new('\u{0415}', "E", "Cyrillic capital ie"),
    Confusable::new('\u{041A}', "K", "Cyrillic capital ka"),
    Confusable::new('\u{041C}', "M", "Cyrillic capital em"),
    Confusable::new('\u{041D}', "H", "Cyrillic capital en"),
    Confusable::new('\u{041E}', "O", "Cyrillic capital o"),
    Confusable::new('\u{0420}', "P", "Cyrillic capital er"),
    Confusable::new('\u{0421}', "C", "Cyrillic capital es"),
    Confusable::new('\u{0422}', "T", "Cyrillic capital te"),
    Confusable::new('\u{0425}', "X", "Cyrillic capital ha"),
    // Greek
    Confusable::new('\u{0391}', "A", "Greek capital alpha"),
    Confusable::new('\u{0392}', "B", "Greek capital beta"),
    Confusable::new('\u{0395}', "E", "Greek capital epsilon"),
    Confusable::new('\u{0397}', "H", "Greek capital eta"),
    Confusable::new('\u{0399}', "I", "Greek capital iota"),
    Confusable::new('\u{039A}', "K", "Greek capital kappa"),
    Confusable::new('\u{039C}', "M", "Greek capital mu"),
    Confusable::new('\u{039D}', "N", "Greek capital nu"),
    Confusable::new('\u{039F}', "O", "Greek capital omicron"),
    Confusable::new('\u{03A1}', "P", "Greek capital rho"),
    Confusable::new('\u{03A4}', "T", "Greek capital tau"),
    Confusable::new('\u{03A7}', "X", "Greek capital chi"),
    Confusable::new('\u{03BF}', "o", "Greek omicron"),
    // Latin look-alikes
    Confusable::new('\u{00D8}', "O", "Latin O with stroke"),
    Confusable::new('\u{00D7}', "x", "multiplication sign"),
];

/// Mathematical, letterlike and fullwidth forms
pub const STYLED_FORMS: &[Confusable] = &[
    Confusable::new('\u{1D400}', "A", "mathematical bold A"),
    Confusable::new('\u{1D401}', "B", "mathematical bold B"),
    Confusable::new('\u{2102}', "C", "double-struck C"),
    Confusable::new('\u{2130}', "E", "script E"),
    Confusable::new('\u{2131}', "F", "script F"),
    Confusable::new('\u{211D}', "R", "double-struck R"),
    Confusable::new('\u{2124}', "Z", "double-struck Z"),
    Confusable::new('\u{FF21}', "A", "fullwidth A"),
    Confusable::new('\u{FF22}', "B", "fullwidth B"),
    Confusable::new('\u{FF23}', "C", "fullwidth C"),
    Confusable::new('\u{FF24}', "D", "fullwidth D"),
    Confusable::new('\u{FF25}', "E", "fullwidth E"),
    Confusable::new('\u{FF11}', "1", "fullwidth 1"),
    Confusable::new('\u{FF12}', "2", "fullwidth 2"),
    Confusable::new('\u{FF13}', "3", "fullwidth 3"),
];

/// Typographic punctuation with ASCII counterparts
pub const PUNCTUATION: &[Confusable] = &[
    Confusable::new('\u{2018}', "'", "left single quotation mark"),
    Confusable::new('\u{2019}', "'", "right single quotation mark"),
    Confusable::new('\u{201C}', "\"", "left double quotation mark"),
    Confusable::new('\u{201D}', "\"", "right double quotation mark"),
    Confusable::new('\u{201E}', "\"", "double low-9 quotation mark"),
    Confusable::new('\u{2010}', "-", "hyphen"),
    Confusable::new('\u{2013}', "-", "en dash"),
    Confusable::new('\u{2014}', "-", "em dash"),
];

/// Unicode spaces that render as a plain space
pub const SPACES: &[Confusable] = &[
    Confusable::new('\u{2000}', " ", "en quad"),
    Confusable::new('\u{2001}', " ", "em quad"),
    Confusable::new('\u{2007}', " ", "figure space"),
    Confusable::new('\u{2009}', " ", "thin space"),
    Confusable::new('\u{202F}', " ", "narrow no-break space"),
    Confusable::new('\u{2800}', " ", "braille pattern blank"),
    Confusable::new('\u{180E}', " ", "Mongolian vowel separator"),
];

/// Invisible and formatting characters treated as noise
pub const INVISIBLE: &[char] = &[
    '\u{200B}', // zero width space
    '\u{200C}', // zero width non-joiner
    '\u{200D}', // zero width joiner
    '\u{2060}', // word joiner
    '\u{FEFF}', // zero width no-break space
    '\u{202F}', // narrow no-break space
    '\u{2800}', // braille pattern blank
    '\u{180E}', // Mongolian vowel separator
    '\u{0F34}', // Tibetan mark bsdus rtags
    '\u{1680}', // Ogham space mark
];

/// Lookup index over every table, built once
static CONFUSABLE_INDEX: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    all_confusables()
        .map(|entry| (entry.ch, entry.replacement))
        .collect()
});

/// Character class matching any invisible character
static INVISIBLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let class: String = INVISIBLE
        .iter()
        .map(|c| format!("\\x{{{:X}}}", *c as u32))
        .collect();
    Regex::new(&format!("[{}]", class)).expect("invisible character class is valid")
});

/// Iterate over all table entries
pub fn all_confusables() -> impl Iterator<Item = &'static Confusable> {
    HOMOGLYPHS
        .iter()
        .chain(STYLED_FORMS.iter())
        .chain(PUNCTUATION.iter())
        .chain(SPACES.iter())
}

/// Replacement for a table key, if any
pub fn replacement_for(ch: char) -> Option<&'static str> {
    CONFUSABLE_INDEX.get(&ch).copied()
}

/// Check if a character is in the invisible class
pub fn is_invisible(ch: char) -> bool {
    INVISIBLE.contains(&ch)
}

/// Check if a character is a table key or invisible
pub fn is_known_anomaly(ch: char) -> bool {
    CONFUSABLE_INDEX.contains_key(&ch) || is_invisible(ch)
}

/// Replace every table key with its mapped text in a single pass
pub fn substitute(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match replacement_for(ch) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
    out
}

/// Remove every invisible character
pub fn strip_invisible(text: &str) -> String {
    INVISIBLE_PATTERN.replace_all(text, "").into_owned()
}
