use std::fmt::Display;

/// Normalizes free text for tokenization.
///
/// The text is lower-cased, every character outside `a-z`/`0-9` becomes a space,
/// whitespace runs collapse to a single space and the ends are trimmed.
///
/// ```rust
/// use spartrack_recommender::normalize_text;
///
/// assert_eq!(normalize_text("  Full-Stack  Dev (React/Node) "), "full stack dev react node");
/// assert_eq!(normalize_text(""), "");
/// ```
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Coercing form of [`normalize_text`]: absent values normalize to `""`, anything else is
/// rendered through `Display` first.
pub fn normalize_value<T: Display + ?Sized>(value: Option<&T>) -> String {
    match value {
        Some(value) => normalize_text(&value.to_string()),
        None => String::new(),
    }
}
