//! YakSafe Core - tokenization and keyword classification.
//!
//! This crate provides the moderation engine for the YakSafe service: a
//! tokenizer that turns raw post text into a set of word tokens, and a
//! deterministic classifier that matches those tokens against fixed
//! category word sets. Classification is a pure function with no I/O and
//! no shared mutable state, so a single classifier instance can be used
//! concurrently from any number of request handlers.

pub mod classifier;
pub mod tokenizer;

pub use classifier::{Category, KeywordClassifier, Verdict, BLOCK_THRESHOLD};
pub use tokenizer::Tokenizer;
