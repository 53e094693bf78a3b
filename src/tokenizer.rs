//! Word tokenizer used for both training and classification

use crate::models::{Token, TokenSet};
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximal runs of letters, numbers and `_`.
/// Combining marks, joiners and other connector punctuation separate words.
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}_]+").unwrap());

/// Lowercase `text` and return its words in encounter order
pub fn tokenize(text: &str) -> Vec<Token> {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Distinct tokens of `text`
pub fn token_set(text: &str) -> TokenSet {
    tokenize(text).into_iter().collect()
}
