//! Word tokenizer for BM25
//!
//! Lowercases the input and splits it into maximal runs of word characters:
//! Unicode letters, Unicode numbers and underscore. Everything else, combining
//! marks and connector punctuation included, separates tokens.

use ahash::AHashSet;
use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("valid regex"));

/// Simple tokenizer that splits on whitespace and punctuation
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize text into terms
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        WORD.find_iter(&lowered)
            .map(|m| m.as_str().to_owned())
            .collect()
    }

    /// Tokenize text into unique terms, in order of first occurrence
    pub fn tokenize_unique(&self, text: &str) -> Vec<String> {
        let mut seen = AHashSet::new();
        self.tokenize(text)
            .into_iter()
            .filter(|term| seen.insert(term.clone()))
            .collect()
    }
}
