//! Configuration loading for sanitext
//!
//! Supports TOML configuration with embedded defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Result, SanitextError};

/// Base policy determines the starting allowed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BasePolicy {
    /// Printable ASCII: letters, digits, punctuation and common whitespace
    #[default]
    AsciiPrintable,

    /// Every Unicode scalar value
    FullUnicode,
}

impl BasePolicy {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ascii" | "ascii_printable" => Some(BasePolicy::AsciiPrintable),
            "unicode" | "full_unicode" => Some(BasePolicy::FullUnicode),
            _ => None,
        }
    }
}

/// General configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable audit logging
    pub audit_log: bool,

    /// Path to audit log file
    pub audit_path: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            audit_log: false,
            audit_path: Some("~/.config/sanitext/audit.jsonl".to_string()),
        }
    }
}

/// Allowed-character policy
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PolicyConfig {
    /// Starting set; alternatives, never unioned
    pub base: BasePolicy,

    /// Characters added individually on top of the base
    pub extra_chars: String,

    /// Add the emoji registry
    pub allow_emoji: bool,

    /// File whose characters are added to the set
    pub extra_file: Option<String>,
}

impl PolicyConfig {
    /// Expanded path of the extra characters file
    pub fn extra_file_path(&self) -> Option<PathBuf> {
        self.extra_file.as_ref().map(|p| Config::expand_path(p))
    }
}

/// Interactive mode configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct InteractiveConfig {
    /// Ask for a decision per disallowed character instead of falling back
    pub enabled: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub policy: PolicyConfig,
    pub interactive: InteractiveConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load() -> Self {
        let config_paths = [
            // User-specific config
            dirs::home_dir().map(|p| p.join(".config/sanitext/config.toml")),
            // System-wide config
            Some(PathBuf::from("/etc/sanitext/config.toml")),
        ];

        for path in config_paths.into_iter().flatten() {
            if path.exists() {
                match Self::load_from(&path) {
                    Ok(config) => return config,
                    Err(e) => eprintln!("Warning: {}", e),
                }
            }
        }

        Config::default()
    }

    /// Load from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SanitextError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| SanitextError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Expand ~ in path strings
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Get the audit log path (expanded)
    pub fn audit_path(&self) -> Option<PathBuf> {
        self.general.audit_path.as_ref().map(|p| Self::expand_path(p))
    }
}

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = r#"
[general]
audit_log = false
audit_path = "~/.config/sanitext/audit.jsonl"

[policy]
base = "ascii_printable"
extra_chars = ""
allow_emoji = false

[interactive]
enabled = false
"#;
