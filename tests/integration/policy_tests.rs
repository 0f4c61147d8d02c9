//! Integration tests for allowed-set construction

use std::io::Write;

use sanitext::{AllowedSet, BasePolicy, Config, PolicyConfig, SanitextError};
use tempfile::{NamedTempFile, TempDir};

fn policy_from_toml(toml: &str) -> PolicyConfig {
    let config: Config = toml::from_str(toml).unwrap();
    config.policy
}

// ============================================================================
// Base policies
// ============================================================================

#[test]
fn test_ascii_base_excludes_unicode() {
    let allowed = AllowedSet::build(&PolicyConfig::default(), None);
    assert!(allowed.contains_all("ABC123!@# \t\n\r"));
    assert!(!allowed.contains('é'));
    assert!(!allowed.contains('🔥'));
}

#[test]
fn test_full_unicode_replaces_ascii_base() {
    let policy = policy_from_toml(
        r#"
        [policy]
        base = "full_unicode"
        "#,
    );
    let allowed = AllowedSet::build(&policy, None);
    assert!(allowed.is_universal());
    assert!(allowed.contains_all("ABC \t\n é 𝑇 ☯ \u{200B}"));
}

#[test]
fn test_extras_never_remove_base_characters() {
    let policy = PolicyConfig {
        base: BasePolicy::AsciiPrintable,
        extra_chars: "αβñç".to_string(),
        allow_emoji: true,
        extra_file: None,
    };
    let allowed = AllowedSet::build(&policy, Some("ⓝⓔⓦ"));
    let base = AllowedSet::ascii_printable();
    for cp in 0u32..0x80 {
        let ch = char::from_u32(cp).unwrap();
        if base.contains(ch) {
            assert!(allowed.contains(ch), "lost base character U+{:04X}", cp);
        }
    }
    assert!(allowed.contains_all("αβñçⓝⓔⓦ🔥"));
}

// ============================================================================
// File-sourced characters
// ============================================================================

#[test]
fn test_allowed_characters_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "é⛄✅").unwrap();

    let policy = PolicyConfig {
        extra_file: Some(file.path().to_string_lossy().into_owned()),
        ..PolicyConfig::default()
    };
    let allowed = AllowedSet::from_policy(&policy).unwrap();
    assert!(allowed.contains_all("é⛄✅"));
    assert!(allowed.contains_all(sanitext::rules::allowlist::ASCII_PRINTABLE));
}

#[test]
fn test_missing_file_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.txt");

    let policy = PolicyConfig {
        extra_file: Some(missing.to_string_lossy().into_owned()),
        ..PolicyConfig::default()
    };
    match AllowedSet::from_policy(&policy) {
        Err(SanitextError::ExtraFile { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected ExtraFile error, got {:?}", other),
    }
}

#[test]
fn test_config_file_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[general]
audit_log = true
audit_path = "/tmp/sanitext-audit.jsonl"

[policy]
extra_chars = "ñ"
allow_emoji = true

[interactive]
enabled = true
"#
    )
    .unwrap();

    let config = Config::load_from(file.path()).unwrap();
    assert!(config.general.audit_log);
    assert!(config.interactive.enabled);
    let allowed = AllowedSet::from_policy(&config.policy).unwrap();
    assert!(allowed.contains('ñ'));
    assert!(allowed.contains('😀'));
}

#[test]
fn test_invalid_config_is_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[policy]\nbase = \"latin1\"\n").unwrap();

    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, SanitextError::Config { .. }));
}
