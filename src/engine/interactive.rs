//! Interactive resolution of disallowed characters
//!
//! A [`Resolver`] is asked once per distinct character; answers are held in
//! a [`DecisionCache`] that lives for a single sanitize call.

use std::collections::HashMap;

use crate::engine::detect::display_name;
use crate::output::Decision;

/// What the resolver is asked about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionRequest {
    pub ch: char,
    pub code_point: u32,
    pub name: String,
}

impl DecisionRequest {
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            code_point: ch as u32,
            name: display_name(ch),
        }
    }
}

/// Source of decisions for disallowed characters
pub trait Resolver {
    /// Answer one request; `None` is an invalid response and is asked again
    fn resolve(&mut self, request: &DecisionRequest) -> Option<Decision>;
}

impl<F> Resolver for F
where
    F: FnMut(&DecisionRequest) -> Option<Decision>,
{
    fn resolve(&mut self, request: &DecisionRequest) -> Option<Decision> {
        self(request)
    }
}

/// Decisions made during one sanitize call
#[derive(Debug, Default)]
pub struct DecisionCache {
    replacements: HashMap<char, String>,
}

impl DecisionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached replacement for a character
    pub fn get(&self, ch: char) -> Option<&str> {
        self.replacements.get(&ch).map(String::as_str)
    }

    /// Replacement for `ch`, asking the resolver until it gives a valid answer
    pub fn decide(&mut self, ch: char, resolver: &mut dyn Resolver) -> &str {
        self.replacements.entry(ch).or_insert_with(|| {
            let request = DecisionRequest::new(ch);
            loop {
                if let Some(decision) = resolver.resolve(&request) {
                    break decision.replacement(ch);
                }
            }
        })
        .as_str()
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Consume the cache into a character to replacement map
    pub fn into_replacements(self) -> HashMap<char, String> {
        self.replacements
    }
}
