//! Integration tests for anomaly detection

use sanitext::{detect_known_anomalies, detect_outside_policy, AllowedSet, SanitizeEngine};

fn chars(records: &[sanitext::Anomaly]) -> Vec<char> {
    records.iter().map(|a| a.character).collect()
}

#[test]
fn test_outside_policy_keeps_every_occurrence() {
    let found = detect_outside_policy("\u{200B}\u{202F}\u{200B}", &AllowedSet::ascii_printable());
    assert_eq!(chars(&found), vec!['\u{200B}', '\u{202F}', '\u{200B}']);
    assert_eq!(found[0].name, "ZERO WIDTH SPACE");
    assert_eq!(found[1].name, "NARROW NO-BREAK SPACE");
    assert_eq!(found[2].name, "ZERO WIDTH SPACE");
}

#[test]
fn test_outside_policy_mixed_text() {
    let found = detect_outside_policy("Hello, wörld! Ⅵ abc ﬁ і\n", &AllowedSet::ascii_printable());
    assert_eq!(chars(&found), vec!['ö', 'Ⅵ', 'ﬁ', 'і']);
    assert!(found.iter().all(|a| a.name.len() > 1));
}

#[test]
fn test_outside_policy_clean_and_empty() {
    let allowed = AllowedSet::ascii_printable();
    assert!(detect_outside_policy("Hello, world!\n\t123", &allowed).is_empty());
    assert!(detect_outside_policy("", &allowed).is_empty());
}

#[test]
fn test_known_anomalies_names() {
    let found = detect_known_anomalies("Th\u{0456}s \u{0456}s \u{0430} test.");
    assert_eq!(found.len(), 3);
    assert_eq!(found[0].name, "CYRILLIC SMALL LETTER BYELORUSSIAN-UKRAINIAN I");
    assert_eq!(found[2].name, "CYRILLIC SMALL LETTER A");
}

#[test]
fn test_known_anomalies_independent_of_policy() {
    // Allowed everywhere, still deceptive
    let engine = SanitizeEngine::new(AllowedSet::full_unicode());
    let text = "p\u{0430}ypal\u{200D}.com";
    assert!(engine.detect(text).is_empty());
    assert_eq!(chars(&engine.detect_known(text)), vec!['\u{0430}', '\u{200D}']);
}

#[test]
fn test_unnamed_character_reports_unknown() {
    let found = detect_outside_policy("\u{0378}", &AllowedSet::ascii_printable());
    assert_eq!(found[0].name, "Unknown");
}

#[test]
fn test_detect_report() {
    let engine = SanitizeEngine::new(AllowedSet::ascii_printable());
    let report = engine.detect_report("Caf\u{e9} \u{0430}");
    assert!(report.output.is_none());
    assert_eq!(report.disallowed.len(), 2);
    assert_eq!(report.known.len(), 1);
    assert!(report.to_json().contains("\"mode\":\"detect\""));
}
