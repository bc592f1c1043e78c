//! Text sanitising

/// Strip everything except ASCII letters, digits, `_` and whitespace
pub fn remove_special_characters(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}
