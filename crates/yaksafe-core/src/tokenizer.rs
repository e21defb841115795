//! Word-token extraction for classification.

use std::collections::BTreeSet;

use regex::Regex;

/// Extracts normalized word tokens from post text.
///
/// A token is a maximal run of lowercase ASCII letters and apostrophes.
/// Input is lowercased before extraction, so matching is case-insensitive.
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    /// Creates a new tokenizer with the token pattern pre-compiled.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"[a-z']+").expect("Invalid token pattern"),
        }
    }

    /// Tokenizes `text` into a deduplicated set of word tokens.
    ///
    /// Always succeeds: empty or non-alphabetic input yields an empty set.
    /// Set iteration order is lexicographic.
    pub fn tokenize(&self, text: &str) -> BTreeSet<String> {
        let text_lower = text.to_lowercase();
        self.pattern
            .find_iter(&text_lower)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
