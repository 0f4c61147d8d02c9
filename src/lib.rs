//! sanitext - Detect and sanitize deceptive Unicode in text
//!
//! This library flags homoglyphs and invisible characters, and rewrites text
//! so that it only contains characters from a policy-defined allowed set.
//!
//! # Features
//!
//! - **Known anomaly detection**: Cyrillic/Greek look-alikes, typographic
//!   punctuation, Unicode spaces and zero-width characters
//! - **Policy detection**: every character outside the allowed set
//! - **Normalization**: homoglyph substitution, invisible stripping and NFKC
//! - **Deterministic sanitizing**: NFKC and decomposition fallback to the
//!   closest allowed form
//! - **Interactive sanitizing**: one keep/remove/replace decision per
//!   distinct character, reused for every occurrence
//! - **Audit logging**: JSONL log of every run
//!
//! # Example
//!
//! ```
//! use sanitext::{AllowedSet, SanitizeEngine};
//!
//! let engine = SanitizeEngine::new(AllowedSet::ascii_printable());
//!
//! assert_eq!(engine.sanitize("Café Ⅵ"), "Cafe VI");
//! assert_eq!(sanitext::normalize("Th\u{0456}s"), "This");
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod output;
pub mod rules;

// Re-exports for convenience
pub use config::{BasePolicy, Config, PolicyConfig};
pub use engine::detect::{detect_known_anomalies, detect_outside_policy, display_name};
pub use engine::fallback::resolve_fallback;
pub use engine::interactive::{DecisionCache, DecisionRequest, Resolver};
pub use engine::normalize::normalize;
pub use engine::{sanitize, Mode, SanitizeEngine};
pub use error::{Result, SanitextError};
pub use output::{Anomaly, Decision, SanitizeReport};
pub use rules::allowlist::AllowedSet;
