use crate::types::Token;
use crate::utils::{normalize_text, normalize_value};
use std::fmt::Display;

/// Splits free text into normalized bag-of-words tokens.
///
/// Order is preserved and duplicates are kept, since term frequency matters to scoring.
/// Empty input yields an empty `Vec`.
pub fn tokenize(text: &str) -> Vec<Token> {
    split_normalized(&normalize_text(text))
}

/// Coercing form of [`tokenize`] for absent or non-string values.
pub fn tokenize_value<T: Display + ?Sized>(value: Option<&T>) -> Vec<Token> {
    split_normalized(&normalize_value(value))
}

fn split_normalized(normalized: &str) -> Vec<Token> {
    normalized
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .collect()
}
