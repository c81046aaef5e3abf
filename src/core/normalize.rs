//! Answer-string normalization for SQuAD scoring.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// English articles removed during normalization.
static ARTICLES: Lazy<HashSet<&'static str>> = Lazy::new(|| HashSet::from(["a", "an", "the"]));

/// Normalizes an answer string for comparison.
///
/// Applies, in order: lowercasing, removal of ASCII punctuation, removal of
/// the article tokens "a", "an" and "the", and collapsing of whitespace runs
/// into single spaces.
pub fn normalize_answer(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    stripped
        .split_whitespace()
        .filter(|token| !ARTICLES.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits a raw answer into its normalized scoring tokens.
pub fn answer_tokens(text: &str) -> Vec<String> {
    normalize_answer(text)
        .split_whitespace()
        .map(String::from)
        .collect()
}
