//! Deterministic keyword-set content classification.
//!
//! Categories carry a fixed word set, severity score, and priority rank.
//! Classification intersects the input's token set against each category
//! and lets the highest-priority category with a hit win.

mod category;
mod keyword;

pub use category::{Category, Verdict, BLOCK_THRESHOLD, CLEAN_REASON, CLEAN_SCORE};
pub use keyword::KeywordClassifier;
