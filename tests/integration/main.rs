//! Integration tests for sanitext

mod detect_tests;
mod policy_tests;
mod sanitize_tests;
