//! Integration tests for deterministic sanitizing and normalization

use sanitext::{normalize, resolve_fallback, sanitize, AllowedSet, Mode, SanitizeEngine};

const SAMPLES: &[&str] = &[
    "Hello, world!\n",
    "Café ☯ Ⅵ ﬁ 𝔗",
    "Th\u{0456}s \u{0456}s \u{0430} test.\u{200B}",
    "\u{201C}smart\u{201D} quotes \u{2014} and dashes",
    "Ｆｕｌｌｗｉｄｔｈ １２３ and ²³",
    "mixed 🔥 emoji 😀 and ǖ",
    "",
];

fn ascii() -> AllowedSet {
    AllowedSet::ascii_printable()
}

fn allowed_sets() -> Vec<AllowedSet> {
    vec![
        ascii(),
        ascii().without('V'),
        AllowedSet::from_chars("AB".chars()),
        AllowedSet::from_chars("abcdefghijklmnopqrstuvwxyz ".chars()),
        AllowedSet::full_unicode().without('☯'),
    ]
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_output_only_contains_allowed_characters() {
    for allowed in allowed_sets() {
        for text in SAMPLES {
            let out = sanitize(text, &allowed, Mode::Deterministic);
            assert!(allowed.contains_all(&out), "{:?} -> {:?}", text, out);
        }
    }
}

#[test]
fn test_sanitize_is_idempotent() {
    for allowed in allowed_sets() {
        for text in SAMPLES {
            let once = sanitize(text, &allowed, Mode::Deterministic);
            let twice = sanitize(&once, &allowed, Mode::Deterministic);
            assert_eq!(once, twice);
        }
    }
}

#[test]
fn test_allowed_text_returned_exactly() {
    let engine = SanitizeEngine::new(AllowedSet::full_unicode());
    for text in SAMPLES {
        assert_eq!(engine.sanitize(text), *text);
    }

    let engine = SanitizeEngine::new(ascii());
    let text = "Just ASCII printable stuff 123 !@#\n\t\r";
    assert_eq!(engine.sanitize(text), text);
}

#[test]
fn test_allowed_characters_keep_their_positions() {
    let engine = SanitizeEngine::new(ascii());
    assert_eq!(engine.sanitize("a☯b☯c"), "abc");
    assert_eq!(engine.sanitize("é-é-é"), "e-e-e");
}

// ============================================================================
// Decomposition fallback
// ============================================================================

#[test]
fn test_fallback_examples() {
    assert_eq!(resolve_fallback('é', &ascii()), "e");
    assert_eq!(resolve_fallback('Ⅵ', &ascii()), "VI");
    assert_eq!(resolve_fallback('ﬁ', &ascii()), "fi");
    assert_eq!(resolve_fallback('☯', &ascii()), "");
}

#[test]
fn test_fallback_partial_set() {
    assert_eq!(resolve_fallback('Ⅵ', &ascii().without('V')), "I");
}

#[test]
fn test_sanitize_examples() {
    let engine = SanitizeEngine::new(ascii());
    assert_eq!(engine.sanitize("Café"), "Cafe");
    assert_eq!(engine.sanitize("Peace ☯ within"), "Peace  within");
    assert_eq!(engine.sanitize("Ⅵ is VI"), "VI is VI");
    assert_eq!(engine.sanitize("Ｆｕｌｌ"), "Full");
}

#[test]
fn test_minimal_set_empties_text() {
    let allowed = AllowedSet::from_chars("AB".chars());
    assert_eq!(sanitize("Hello, world! Café Ⅵ", &allowed, Mode::Deterministic), "");
}

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn test_normalize_homoglyphs() {
    assert_eq!(
        normalize("Th\u{0456}s t\u{0435}xt c\u{043E}nta\u{0456}ns homoglyphs."),
        "This text contains homoglyphs."
    );
}

#[test]
fn test_normalize_invisible() {
    assert_eq!(normalize("Invisible\u{200B} character."), "Invisible character.");
}

#[test]
fn test_normalize_needs_more_than_nfkc() {
    use unicode_normalization::UnicodeNormalization;

    let sample = "Th\u{0456}s t\u{0435}xt c\u{043E}nta\u{0456}ns homoglyphs and \
                  inv\u{0456}sibl\u{0435} characters.\u{200B}";
    let expected = "This text contains homoglyphs and invisible characters.";

    assert_eq!(normalize(sample), expected);
    assert_ne!(sample.nfkc().collect::<String>(), expected);
}

#[test]
fn test_normalize_ignores_policy() {
    // Unmapped non-ASCII survives normalization
    assert_eq!(normalize("Café ☯"), "Café ☯");
}
