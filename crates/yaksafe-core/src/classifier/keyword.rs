//! Keyword-set classifier.
//!
//! Intersects the token set of a post against each category's fixed word
//! set and picks the highest-priority category with at least one hit.

use std::collections::{BTreeMap, HashSet};

use super::{Category, Verdict};
use crate::tokenizer::Tokenizer;

/// Word table for one category.
struct CategoryWords {
    category: Category,
    /// Word set for O(1) membership checks.
    words: HashSet<&'static str>,
}

/// Deterministic keyword-set classifier.
///
/// Holds the fixed category word tables and a tokenizer. `classify` is a
/// pure function, so one instance can serve arbitrarily many concurrent
/// callers without locking.
pub struct KeywordClassifier {
    tokenizer: Tokenizer,
    categories: Vec<CategoryWords>,
}

impl KeywordClassifier {
    /// Creates a classifier with the fixed category tables.
    pub fn new() -> Self {
        let categories = Category::all()
            .iter()
            .map(|&category| CategoryWords {
                category,
                words: category.words().iter().copied().collect(),
            })
            .collect();

        Self {
            tokenizer: Tokenizer::new(),
            categories,
        }
    }

    /// Classifies the given text and returns a verdict.
    ///
    /// The hits map is populated for every category regardless of outcome;
    /// each list is sorted because the token set iterates lexicographically.
    pub fn classify(&self, text: &str) -> Verdict {
        let tokens = self.tokenizer.tokenize(text);

        let mut hits: BTreeMap<Category, Vec<String>> = BTreeMap::new();
        for table in &self.categories {
            let matched: Vec<String> = tokens
                .iter()
                .filter(|token| table.words.contains(token.as_str()))
                .cloned()
                .collect();
            hits.insert(table.category, matched);
        }

        // First category in priority order with a hit wins.
        let winner = self
            .categories
            .iter()
            .map(|table| table.category)
            .find(|category| !hits[category].is_empty());

        match winner {
            Some(category) => Verdict::flagged(category, hits),
            None => Verdict::clean(hits),
        }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}
