//! Moderation categories and classification verdicts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Toxicity score at or above which content is marked unsafe.
pub const BLOCK_THRESHOLD: u8 = 70;

/// Score assigned when no category matches.
pub const CLEAN_SCORE: u8 = 5;

/// Reason string assigned when no category matches.
pub const CLEAN_REASON: &str = "OK";

/// Moderation categories that a post can be classified into.
///
/// Declaration order is priority order: when a post matches words from
/// several categories, the first matching variant here wins. Severity of
/// harm outranks breadth of matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Sexual violence content.
    SexualViolence,
    /// Threats or calls to violence.
    Threat,
    /// Hate speech or discrimination.
    Hate,
    /// Scams and fraudulent content.
    Fraud,
    /// Drug-related content.
    Drugs,
    /// Profane but non-dangerous language.
    Profanity,
}

impl Category {
    /// Returns all categories in priority order (highest severity first).
    pub fn all() -> &'static [Category] {
        &[
            Category::SexualViolence,
            Category::Threat,
            Category::Hate,
            Category::Fraud,
            Category::Drugs,
            Category::Profanity,
        ]
    }

    /// Returns the wire tag for this category.
    pub fn name(&self) -> &'static str {
        match self {
            Category::SexualViolence => "sexual_violence",
            Category::Threat => "threat",
            Category::Hate => "hate",
            Category::Fraud => "fraud",
            Category::Drugs => "drugs",
            Category::Profanity => "profanity",
        }
    }

    /// Returns the toxicity score assigned when this category wins.
    pub fn score(&self) -> u8 {
        match self {
            Category::SexualViolence => 99,
            Category::Threat => 95,
            Category::Hate => 92,
            Category::Fraud => 80,
            Category::Drugs => 75,
            Category::Profanity => 55,
        }
    }

    /// Returns the human-readable reason reported when this category wins.
    pub fn reason(&self) -> &'static str {
        match self {
            Category::SexualViolence => "Sexual violence content is not allowed.",
            Category::Threat => "Threat/violence content is not allowed.",
            Category::Hate => "Hate speech is not allowed.",
            Category::Fraud => "Scam/fraud content is not allowed.",
            Category::Drugs => "Drug-related content is restricted.",
            Category::Profanity => "Please keep language respectful.",
        }
    }

    /// Returns the fixed word set that triggers this category.
    pub fn words(&self) -> &'static [&'static str] {
        match self {
            Category::SexualViolence => &["rape"],
            Category::Threat => &["kill", "bomb", "terror"],
            Category::Hate => &["nazi", "hate"],
            Category::Fraud => &["fraud", "scam", "fake", "cheat", "steal", "spam"],
            Category::Drugs => &["drugs"],
            Category::Profanity => &["damn", "hell"],
        }
    }
}

/// Result of classifying a post.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// The winning category, or `None` when the post is clean.
    pub category: Option<Category>,
    /// Toxicity score of the winning category (0-99).
    pub toxicity_score: u8,
    /// Reason for the winning category ("OK" when clean). Callers suppress
    /// this in public responses when the verdict is safe.
    pub reason: &'static str,
    /// Matched tokens per category, sorted. One entry for every category,
    /// empty lists included.
    pub hits: BTreeMap<Category, Vec<String>>,
}

impl Verdict {
    /// Creates a verdict with the given winning category.
    pub fn flagged(category: Category, hits: BTreeMap<Category, Vec<String>>) -> Self {
        Self {
            category: Some(category),
            toxicity_score: category.score(),
            reason: category.reason(),
            hits,
        }
    }

    /// Creates a clean verdict.
    pub fn clean(hits: BTreeMap<Category, Vec<String>>) -> Self {
        Self {
            category: None,
            toxicity_score: CLEAN_SCORE,
            reason: CLEAN_REASON,
            hits,
        }
    }

    /// Returns true when the score falls below the block threshold.
    pub fn is_safe(&self) -> bool {
        self.toxicity_score < BLOCK_THRESHOLD
    }

    /// Returns the wire tag for this verdict ("clean" when no category won).
    pub fn label(&self) -> &'static str {
        self.category.map(|c| c.name()).unwrap_or("clean")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_all_returns_all_variants() {
        let all = Category::all();
        assert_eq!(all.len(), 6);
    }

    #[test]
    fn priority_order_is_by_descending_score() {
        let scores: Vec<u8> = Category::all().iter().map(|c| c.score()).collect();
        let mut sorted = scores.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(scores, sorted);
    }

    #[test]
    fn every_category_has_words() {
        for category in Category::all() {
            assert!(!category.words().is_empty(), "{} has no words", category.name());
        }
    }

    #[test]
    fn wire_tags_are_snake_case() {
        let tag = serde_json::to_string(&Category::SexualViolence).unwrap();
        assert_eq!(tag, "\"sexual_violence\"");
    }

    #[test]
    fn flagged_verdict_carries_category_score_and_reason() {
        let verdict = Verdict::flagged(Category::Hate, BTreeMap::new());
        assert_eq!(verdict.category, Some(Category::Hate));
        assert_eq!(verdict.toxicity_score, 92);
        assert_eq!(verdict.reason, "Hate speech is not allowed.");
        assert_eq!(verdict.label(), "hate");
        assert!(!verdict.is_safe());
    }

    #[test]
    fn clean_verdict_is_safe() {
        let verdict = Verdict::clean(BTreeMap::new());
        assert_eq!(verdict.category, None);
        assert_eq!(verdict.toxicity_score, CLEAN_SCORE);
        assert_eq!(verdict.reason, "OK");
        assert_eq!(verdict.label(), "clean");
        assert!(verdict.is_safe());
    }

    #[test]
    fn score_exactly_at_threshold_is_unsafe() {
        let at_threshold = Verdict {
            category: Some(Category::Fraud),
            toxicity_score: BLOCK_THRESHOLD,
            reason: Category::Fraud.reason(),
            hits: BTreeMap::new(),
        };
        assert!(!at_threshold.is_safe());

        let below_threshold = Verdict {
            toxicity_score: BLOCK_THRESHOLD - 1,
            ..at_threshold
        };
        assert!(below_threshold.is_safe());
    }
}
